//! Command line interface.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `sync` | Send every category to the search index |
//! | `sync --category-id <ID>` | Send a single category |
//! | `category-saved <ID>` | Category create/update hook, honors the auto-send setting |
//! | `settings show` | Print the stored settings with the API key masked |
//! | `settings set ...` | Update one or more stored settings |
//! | `uninstall` | Remove every stored setting |

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use category_indexer_shared::CategoryId;

use crate::config::{Dependencies, IndexerSettings, SettingsUpdate};
use crate::notices::NoticeSink;
use crate::IndexingError;

/// Sync WooCommerce product categories into an Algolia index.
#[derive(Parser, Debug)]
#[command(name = "category-indexer", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Send categories to the search index.
    Sync {
        /// Only send this category.
        #[arg(long, value_name = "ID")]
        category_id: Option<CategoryId>,
    },

    /// Notify the indexer that a category was created or updated.
    ///
    /// Does nothing unless automatic sending is enabled.
    CategorySaved {
        /// Term ID of the saved category.
        term_id: CategoryId,
    },

    /// Inspect or change the stored settings.
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },

    /// Delete every stored setting.
    Uninstall,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SettingsCommand {
    /// Print the current settings.
    Show,

    /// Update the given settings and leave the others untouched.
    Set {
        /// Algolia application ID.
        #[arg(long)]
        app_id: Option<String>,

        /// Algolia admin API key.
        #[arg(long)]
        api_key: Option<String>,

        /// Target index name.
        #[arg(long)]
        index_name: Option<String>,

        /// Send categories automatically when they are saved.
        #[arg(long, value_name = "BOOL")]
        auto_send: Option<bool>,
    },
}

/// Run one command.
///
/// Returns `Ok(())` when the command completed or a category trigger was
/// skipped; the outcome itself has already been reported through `notices`.
pub async fn execute(
    command: Command,
    deps: &Dependencies,
    notices: Arc<dyn NoticeSink>,
) -> Result<(), IndexingError> {
    match command {
        Command::Sync { category_id } => {
            let sync = deps.category_sync(notices)?;
            sync.sync(category_id).await?;
        }
        Command::CategorySaved { term_id } => {
            let sync = deps.category_sync(notices)?;
            sync.on_category_saved(term_id).await?;
        }
        Command::Settings { action: SettingsCommand::Show } => {
            let settings = IndexerSettings::load(deps.options.as_ref())?;
            println!("{}", render_settings(&settings));
        }
        Command::Settings {
            action:
                SettingsCommand::Set {
                    app_id,
                    api_key,
                    index_name,
                    auto_send,
                },
        } => {
            let update = SettingsUpdate {
                application_id: app_id,
                api_key,
                index_name,
                auto_send_categories: auto_send,
            };
            if update.is_empty() {
                return Err(IndexingError::config("No settings given to update"));
            }
            update.apply(deps.options.as_ref())?;
            info!("Settings updated");
        }
        Command::Uninstall => {
            IndexerSettings::uninstall(deps.options.as_ref())?;
        }
    }

    Ok(())
}

/// Human-readable view of the settings. The API key is masked.
pub fn render_settings(settings: &IndexerSettings) -> String {
    let show = |value: Option<&str>| value.unwrap_or("(not set)").to_string();

    format!(
        "Application ID: {}\nAdmin API key:  {}\nIndex name:     {}\nAuto-send:      {}",
        show(settings.application_id.as_deref()),
        show(settings.masked_api_key().as_deref()),
        show(settings.index_name.as_deref()),
        if settings.auto_send_categories { "on" } else { "off" },
    )
}
