use std::fmt;

use colored::Colorize;

/// Plain informational line.
pub fn info(message: impl fmt::Display) {
    println!("{}", message);
}

pub fn success(message: impl fmt::Display) {
    println!("{}", format!("[+] {}", message).bright_green());
}

pub fn warning(message: impl fmt::Display) {
    println!("{}", format!("[!] {}", message).bright_yellow());
}

pub fn error(message: impl fmt::Display) {
    println!("{}", format!("[x] {}", message).bright_red());
}

/// Secondary guidance printed after errors and list views.
pub fn hint(message: impl fmt::Display) {
    println!("{}", message.to_string().dimmed());
}

pub fn section(title: impl fmt::Display) {
    println!("\n{}", format!("=== {} ===", title).bold());
}
