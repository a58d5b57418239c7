//! Shell context, command registry, and dispatch.

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    errors::TrackerError,
    ledger::Ledger,
    recommend::{self, BudgetReview},
    storage::{JsonStorage, StorageBackend},
};

use super::{commands, io as cli_io, output};

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

/// Errors surfaced while executing a single command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Prompt failed: {0}")]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

/// Errors that abort the shell itself rather than one command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        self.entries.push(entry);
    }

    /// Looks a command up by primary name or alias.
    pub fn resolve(&self, name: &str) -> Option<&CommandEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name == name || entry.aliases.iter().any(|alias| *alias == name))
    }

    pub fn list(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }
}

/// Owns the ledger, storage, and configuration for one shell session.
/// There are no ambient globals; every command goes through this context.
pub struct ShellContext {
    mode: CliMode,
    registry: CommandRegistry,
    pub(crate) ledger: Ledger,
    storage: JsonStorage,
    config_manager: ConfigManager,
    pub(crate) config: Config,
    pub(crate) theme: ColorfulTheme,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let storage = JsonStorage::new_default()?;
        let ledger = storage.load()?;
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;

        if !ledger.is_empty() {
            tracing::info!(
                "loaded {} entries from {}",
                ledger.entry_count(),
                storage.slot_path().display()
            );
        }

        Ok(Self {
            mode,
            registry,
            ledger,
            storage,
            config_manager,
            config,
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    pub(crate) fn is_interactive(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub(crate) fn prompt(&self) -> String {
        "pocket-ledger> ".into()
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.resolve(name)
    }

    pub(crate) fn commands(&self) -> impl Iterator<Item = &CommandEntry> {
        self.registry.list()
    }

    pub(crate) fn format_amount(&self, value: f64) -> String {
        format!("{} {:.2}", self.config.currency, value)
    }

    pub(crate) fn review(&self) -> BudgetReview {
        recommend::review_ledger(&self.ledger)
    }

    /// Post-mutation pipeline: persist the full state, recompute the review,
    /// re-render the summary line.
    pub(crate) fn commit(&mut self) -> CommandResult {
        self.storage.save(&self.ledger)?;
        let review = self.review();
        output::info(format!("Balance: {}", self.format_amount(review.balance)));
        if review.over_budget() {
            output::warning(format!("{} See `advice` for suggestions.", review.message));
        }
        Ok(())
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager
            .save(&self.config)
            .map_err(CommandError::from)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(entry) = self.registry.resolve(command) {
            let handler = entry.handler;
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .into_iter()
            .map(|name| (levenshtein(name, input), name))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                output::hint(format!("Did you mean `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        match cli_io::confirm_action(&self.theme, "Exit shell?", true) {
            Ok(choice) => Ok(choice),
            Err(CommandError::Dialoguer(err)) => Err(CliError::Prompt(err)),
            Err(_) => Ok(true),
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Tracker(TrackerError::Validation(message)) => {
                output::error(message);
                Ok(())
            }
            other => {
                output::error(other.to_string());
                Ok(())
            }
        }
    }

    /// Holds full-screen views until the user dismisses them. A no-op in
    /// script mode.
    pub(crate) fn await_view_escape(&self) -> CommandResult {
        if self.mode != CliMode::Interactive {
            return Ok(());
        }
        output::hint("Press ESC or Enter to return to the prompt.");
        cli_io::wait_for_escape().map_err(CommandError::Io)
    }
}
