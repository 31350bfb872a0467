//! Options store persisted as a JSON object on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::OptionsError;
use crate::interfaces::OptionsStore;

/// Distinguishes temporary files written by one process.
static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Options store backed by a single JSON file.
///
/// The file holds one flat object mapping option names to values. It is read
/// on every access and rewritten through a temporary file on every change, so
/// a crash mid-write never leaves a truncated file behind. A missing file is
/// an empty store.
pub struct JsonFileOptionsStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileOptionsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A temporary file next to the store, unique across processes and writes.
    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(format!(
            ".{}.{}.tmp",
            process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        PathBuf::from(tmp)
    }

    fn load(&self) -> Result<Map<String, Value>, OptionsError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&contents)? {
            Value::Object(options) => Ok(options),
            other => Err(OptionsError::Parse(format!(
                "expected a JSON object in {}, found {}",
                self.path.display(),
                other
            ))),
        }
    }

    fn store(&self, options: &Map<String, Value>) -> Result<(), OptionsError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.tmp_path();
        let written = fs::write(&tmp, serde_json::to_vec_pretty(options)?)
            .and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        debug!(path = %self.path.display(), options = options.len(), "Options saved");
        Ok(())
    }
}

impl OptionsStore for JsonFileOptionsStore {
    fn get(&self, key: &str) -> Result<Option<Value>, OptionsError> {
        let _guard = self.lock.lock().map_err(|_| OptionsError::Poisoned)?;
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), OptionsError> {
        let _guard = self.lock.lock().map_err(|_| OptionsError::Poisoned)?;
        let mut options = self.load()?;
        options.insert(key.to_string(), value);
        self.store(&options)
    }

    fn delete(&self, key: &str) -> Result<bool, OptionsError> {
        let _guard = self.lock.lock().map_err(|_| OptionsError::Poisoned)?;
        let mut options = self.load()?;
        if options.remove(key).is_none() {
            return Ok(false);
        }
        self.store(&options)?;
        Ok(true)
    }
}
