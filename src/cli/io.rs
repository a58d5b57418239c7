use std::io;

use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal,
};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::cli::core::CommandError;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Prompt for a non-empty label such as a source or category name.
pub fn prompt_label(theme: &ColorfulTheme, prompt: &str) -> Result<String, CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Value cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map(|value| value.trim().to_string())
        .map_err(CommandError::from)
}

/// Prompt for a strictly positive amount.
pub fn prompt_amount(theme: &ColorfulTheme, prompt: &str) -> Result<f64, CommandError> {
    Input::<f64>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|value: &f64| -> Result<(), &str> {
            if !value.is_finite() || *value <= 0.0 {
                Err("Amount must be greater than 0")
            } else {
                Ok(())
            }
        })
        .interact()
        .map_err(CommandError::from)
}

/// Prompt for a calendar date, prefilled with `default`.
pub fn prompt_date(
    theme: &ColorfulTheme,
    prompt: &str,
    default: NaiveDate,
) -> Result<NaiveDate, CommandError> {
    let raw = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(default.format(DATE_FORMAT).to_string())
        .validate_with(|input: &String| -> Result<(), &str> {
            if NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).is_ok() {
                Ok(())
            } else {
                Err("Use the YYYY-MM-DD format")
            }
        })
        .interact_text()
        .map_err(CommandError::from)?;
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| CommandError::InvalidArguments("date must use the YYYY-MM-DD format".into()))
}

/// Blocks until ESC or Enter is pressed. Used after full-screen views.
pub fn wait_for_escape() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let result = wait_loop();
    terminal::disable_raw_mode()?;
    result
}

fn wait_loop() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc | KeyCode::Enter => return Ok(()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(())
                }
                _ => {}
            }
        }
    }
}
