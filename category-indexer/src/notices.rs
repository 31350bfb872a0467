//! User-visible notices.
//!
//! Each sync ends with exactly one notice telling the administrator what
//! happened. Notices are separate from logs: logs go to stderr through
//! `tracing`, notices go to whatever [`NoticeSink`] the caller installed.

use std::fmt;
use std::sync::Mutex;

use crate::errors::SyncError;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A message for the administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Records were written.
    pub fn categories_sent(count: usize) -> Self {
        Self::new(
            NoticeLevel::Success,
            format!("{} categories sent to Algolia.", count),
        )
    }

    /// The catalog had nothing matching, so nothing was written.
    pub fn nothing_to_send() -> Self {
        Self::new(NoticeLevel::Info, "No categories to send to Algolia.")
    }

    /// A category-change trigger arrived while auto-send is off.
    pub fn auto_send_disabled() -> Self {
        Self::new(
            NoticeLevel::Info,
            "Automatic category sync is disabled; nothing sent.",
        )
    }

    /// The notice matching a failed sync.
    pub fn from_error(error: &SyncError) -> Self {
        match error {
            SyncError::MissingConfiguration(missing) => Self::new(
                NoticeLevel::Warning,
                format!(
                    "{}. Please fill in all Algolia settings before sending categories.",
                    missing
                ),
            ),
            SyncError::Connection(_) => Self::new(
                NoticeLevel::Error,
                "An error has been encountered. Please check your application ID and API key.",
            ),
            SyncError::CatalogUnavailable(e) => Self::new(
                NoticeLevel::Error,
                format!("Could not read categories from the store: {}", e),
            ),
            SyncError::EmptyResponse => Self::new(
                NoticeLevel::Error,
                "No response from the server. Please check your settings and try again.",
            ),
            SyncError::Write(e) => Self::new(
                NoticeLevel::Error,
                format!("Algolia rejected the categories: {}", e),
            ),
            SyncError::Settings(e) => Self::new(
                NoticeLevel::Error,
                format!("Could not read the indexer settings: {}", e),
            ),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.as_str(), self.message)
    }
}

/// Where notices are delivered.
pub trait NoticeSink: Send + Sync {
    fn emit(&self, notice: &Notice);
}

/// Prints notices for a terminal: success and info on stdout, the rest on stderr.
#[derive(Debug, Default)]
pub struct ConsoleNotices;

impl NoticeSink for ConsoleNotices {
    fn emit(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Success | NoticeLevel::Info => println!("{}", notice),
            NoticeLevel::Warning | NoticeLevel::Error => eprintln!("{}", notice),
        }
    }
}

/// Keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordedNotices {
    notices: Mutex<Vec<Notice>>,
}

impl RecordedNotices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }
}

impl NoticeSink for RecordedNotices {
    fn emit(&self, notice: &Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice.clone());
        }
    }
}
