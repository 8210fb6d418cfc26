//! Theme command handler

use super::fail;
use crate::args::{ThemeArg, ThemeSubcommand};
use grade_tracker::config::Config;
use grade_tracker::core::storage::{self, FileStore, Theme};

/// Show or store the display theme
pub fn run(subcommand: Option<ThemeSubcommand>, config: &Config) {
    let mut store = FileStore::new(config.data_dir());
    match subcommand {
        None | Some(ThemeSubcommand::Get) => {
            let theme = storage::load_theme(&store).unwrap_or_else(|e| fail(e));
            println!("{theme}");
        }
        Some(ThemeSubcommand::Set { theme }) => {
            let theme = match theme {
                ThemeArg::Light => Theme::Light,
                ThemeArg::Dark => Theme::Dark,
            };
            if let Err(e) = storage::save_theme(&mut store, theme) {
                fail(format!("Failed to save theme: {e}"));
            }
            println!("✓ Theme set to {theme}");
        }
    }
}
