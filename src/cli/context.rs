use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Confirm};
use spendcat_config::{Config, ConfigManager};
use spendcat_core::{snapshot_warnings, SnapshotStorage};
use spendcat_storage_json::JsonSnapshotStorage;

use crate::cli::commands;
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::CommandRegistry;
use crate::errors::{CliError, CommandError};
use crate::http::Server;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// State shared by every console command.
pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    pub server: Server,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub storage: JsonSnapshotStorage,
    pub(crate) registry: CommandRegistry,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_config_manager(mode, ConfigManager::default_location()?)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let context = Self {
            mode,
            running: true,
            server: Server::in_memory(),
            config,
            config_manager,
            storage: JsonSnapshotStorage::new(),
            registry,
        };
        context.apply_output_preferences();

        if let Some(seed) = context.config.seed_path.clone() {
            context.load_snapshot(&seed)?;
        }
        Ok(context)
    }

    pub fn apply_output_preferences(&self) {
        let plain = self.config.plain_output || self.mode == CliMode::Script;
        output::set_preferences(OutputPreferences {
            color_enabled: self.config.use_color() && self.mode == CliMode::Interactive,
            plain_mode: plain,
        });
    }

    pub fn prompt(&self) -> String {
        "spendcat> ".to_string()
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Replaces the catalogue with the snapshot at `path`, printing any
    /// consistency warnings it carries.
    pub fn load_snapshot(&self, path: &Path) -> Result<usize, CommandError> {
        let snapshot = self.storage.load_snapshot(path)?;
        for warning in snapshot_warnings(&snapshot) {
            output::warning(warning);
        }
        let total = snapshot.categories.len() + snapshot.questions.len();
        self.server.restore(snapshot);
        tracing::info!("snapshot loaded from {}", path.display());
        Ok(total)
    }

    pub fn export_snapshot(&self, path: &Path) -> Result<(), CommandError> {
        self.storage.save_snapshot(path, &self.server.snapshot())?;
        tracing::info!("snapshot exported to {}", path.display());
        Ok(())
    }

    pub(crate) fn dispatch(&mut self, command: &str, raw: &str, args: &[&str]) -> LoopControl {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return LoopControl::Continue;
        };
        match handler(self, args) {
            Ok(()) => LoopControl::Continue,
            Err(CommandError::ExitRequested) => LoopControl::Exit,
            Err(err) => {
                self.report_error(err);
                LoopControl::Continue
            }
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.suggest(input, 3) {
            output::hint(format!("Did you mean `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Exit console?")
            .default(true)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            other => output::error(other),
        }
    }
}
