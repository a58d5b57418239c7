use crate::cli::core::{CommandEntry, ShellContext};
use crate::cli::output;

pub(crate) fn print_overview(context: &ShellContext) {
    output::section("Available commands");
    for entry in context.commands() {
        output::info(format!("  {:<10} {}", entry.name, entry.description));
    }
    output::hint("Use `help <command>` for details.");
}

pub(crate) fn print_command(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name));
    output::info(format!("  Description: {}", entry.description));
    output::info(format!("  Usage: {}", entry.usage));
    if !entry.aliases.is_empty() {
        output::info(format!("  Aliases: {}", entry.aliases.join(", ")));
    }
}
