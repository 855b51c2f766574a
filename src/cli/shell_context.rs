//! Shared runtime state for CLI interactions and command execution.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::{
    config::{Config, ConfigManager},
    ledger::{Clock, LedgerState, SystemClock, Transaction},
    storage::{JsonFileStore, LedgerStore},
    theme::Theme,
};

use super::{
    commands,
    core::{CliError, CliMode, CommandError, CommandResult, LoopControl},
    output::{self, OutputPreferences},
    registry::{CommandEntry, CommandRegistry},
};

/// The most recent spend while it can still be reverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingUndo {
    pub transaction: Transaction,
    pub balance_before: f64,
    pub offered_at: DateTime<Utc>,
}

impl PendingUndo {
    pub fn is_open(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now - self.offered_at <= window
    }
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub config: Config,
    pub store: LedgerStore<JsonFileStore>,
    pub clock: Arc<dyn Clock>,
    pub state: LedgerState,
    pub theme_index: i64,
    pub pending_undo: Option<PendingUndo>,
    pub dialog_theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    /// Loads configuration and persisted state from the app data directory.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let manager = ConfigManager::new()?;
        let config = manager.load()?;
        let state_path = config.state_file(manager.base_dir());
        let store = LedgerStore::new(JsonFileStore::open(state_path)?);
        Ok(Self::with_parts(mode, config, store, Arc::new(SystemClock)))
    }

    pub fn with_parts(
        mode: CliMode,
        config: Config,
        store: LedgerStore<JsonFileStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let snapshot = store.load();
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let theme = Theme::by_index(snapshot.theme_index);
        output::set_preferences(OutputPreferences {
            color: config.color && mode == CliMode::Interactive,
            theme,
        });

        Self {
            mode,
            registry,
            config,
            store,
            clock,
            state: snapshot.state,
            theme_index: snapshot.theme_index,
            pending_undo: None,
            dialog_theme: ColorfulTheme::default(),
            running: true,
        }
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.get(command).map(|entry| entry.handler) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub fn prompt(&self) -> String {
        if self.state.is_active() {
            format!("1left [{}]> ", crate::currency::format_money(self.state.balance))
        } else {
            "1left> ".to_string()
        }
    }

    pub fn theme(&self) -> &'static Theme {
        Theme::by_index(self.theme_index)
    }

    /// Persists `state` and makes it current. On a failed save the previous
    /// state stays in place.
    pub fn commit(&mut self, state: LedgerState) -> CommandResult {
        self.store.save(&state)?;
        self.state = state;
        Ok(())
    }

    pub fn set_theme(&mut self, index: i64) -> CommandResult {
        self.store.save_theme(index)?;
        self.theme_index = index;
        output::set_theme(Theme::by_index(index));
        Ok(())
    }

    /// Takes the pending undo if its window is still open, discarding it otherwise.
    pub fn take_open_undo(&mut self) -> Option<PendingUndo> {
        let pending = self.pending_undo.take()?;
        let window =
            Duration::from_std(self.config.undo_window()).unwrap_or_else(|_| Duration::zero());
        if pending.is_open(self.clock.now(), window) {
            Some(pending)
        } else {
            None
        }
    }

    pub fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.suggest(input) {
            output::hint(format!("Suggestion: `{}`?", best));
        }
    }

    pub fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        Confirm::with_theme(&self.dialog_theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(CommandError::from)
    }

    pub fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&self.dialog_theme)
            .with_prompt("Exit?")
            .default(true)
            .interact()
            .map_err(CliError::from)
    }

    pub fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                tracing::warn!(%message, "command rejected");
                output::error(&message);
                output::hint("Use `help <command>` for usage details.");
            }
            other => output::error(other.to_string()),
        }
    }
}
