//! Editor launcher command.
//!
//! Resolves the store and session settings, then hands over to the TUI.

use std::sync::Arc;

use tracing::warn;

use crate::cli::{Cli, RunArgs};
use crate::config::Config;
use crate::error::Result;
use crate::store::{JsonlStore, RecordStore};
use crate::tui::{available_themes, Theme};

/// Run the editor command.
pub fn run(_cli: &Cli, args: &RunArgs, config: Config) -> Result<()> {
    let config = apply_overrides(config, args);
    let store: Arc<dyn RecordStore> = Arc::new(JsonlStore::new(&config.store.path));
    crate::tui::run(store, &config)
}

/// Fold command-line flags into the loaded configuration.
fn apply_overrides(mut config: Config, args: &RunArgs) -> Config {
    if let Some(theme) = &args.theme {
        if Theme::from_name(theme).is_none() {
            warn!(
                theme = %theme,
                available = ?available_themes(),
                "Unknown theme requested"
            );
        }
        config.theme.name = theme.clone();
    }
    if let Some(limit) = args.undo_limit {
        config.session.undo_limit = limit;
    }
    if args.no_help {
        config.display.show_help = false;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_over_config() {
        let args = RunArgs {
            theme: Some("light".to_string()),
            undo_limit: Some(3),
            no_help: true,
        };
        let config = apply_overrides(Config::default(), &args);

        assert_eq!(config.theme.name, "light");
        assert_eq!(config.session.undo_limit, 3);
        assert!(!config.display.show_help);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let mut base = Config::default();
        base.session.undo_limit = 9;
        let config = apply_overrides(base, &RunArgs::default());

        assert_eq!(config.session.undo_limit, 9);
        assert_eq!(config.theme.name, "dark");
        assert!(config.display.show_help);
    }
}
