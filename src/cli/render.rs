// src/cli/render.rs
//! Text for the console. Every function here returns a `String`; printing is
//! left to the menu.
use console::style;

use crate::core::RegistryError;
use crate::models::{Strength, User};
use crate::utils::{mask_password, pad_cell};

const HEADER_WIDTH: usize = 50;
const RULE_WIDTH: usize = 40;

pub fn header(title: &str) -> String {
    let rule = style("=".repeat(HEADER_WIDTH)).cyan();
    let title = style(format!("{:^width$}", title, width = HEADER_WIDTH)).magenta().bold();
    format!("\n{rule}\n{title}\n{rule}\n")
}

fn rule() -> String {
    style("─".repeat(RULE_WIDTH)).cyan().to_string()
}

pub fn success(message: &str) -> String {
    style(format!("✓ {}", message)).green().to_string()
}

pub fn error(message: &str) -> String {
    style(format!("✗ {}", message)).red().to_string()
}

pub fn warning(message: &str) -> String {
    style(format!("⚠ {}", message)).yellow().to_string()
}

pub fn info(message: &str) -> String {
    style(format!("ℹ {}", message)).blue().to_string()
}

pub fn registry_error(err: &RegistryError) -> String {
    if err.is_warning() {
        warning(&err.to_string())
    } else {
        error(&err.to_string())
    }
}

pub fn menu_option(number: &str, description: &str) -> String {
    format!("{} {}", style(format!("{}.", number)).cyan().bold(), description)
}

pub fn strength(strength: Strength) -> String {
    styled_strength(strength, strength.to_string())
}

// Pad before styling so escape codes don't count toward the width
fn strength_cell(strength: Strength, width: usize) -> String {
    styled_strength(strength, pad_cell(&strength.to_string(), width))
}

fn styled_strength(strength: Strength, text: String) -> String {
    match strength {
        Strength::Strong => style(text).green().to_string(),
        Strength::Medium => style(text).yellow().to_string(),
        Strength::Weak => style(text).red().to_string(),
    }
}

pub fn main_menu<'a>(options: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut out = header("USER MANAGEMENT SYSTEM");
    for (number, description) in options {
        out.push_str(&menu_option(number, description));
        out.push('\n');
    }
    out.push_str(&format!("\n{}", style("=".repeat(HEADER_WIDTH)).cyan()));
    out
}

pub fn user_details(user: &User) -> String {
    let rule = rule();
    [
        format!("\n{rule}"),
        style("User Details:").magenta().bold().to_string(),
        rule.clone(),
        format!("{} {}", style("Username:").bold(), user.username()),
        format!("{} {}", style("Password:").bold(), mask_password(user.password())),
        format!("{} {}", style("Strength:").bold(), strength(user.strength())),
        rule,
    ]
    .join("\n")
}

pub fn user_table<'a>(rows: impl Iterator<Item = (&'a str, Strength)>) -> String {
    let mut count = 0usize;
    let mut body = String::new();
    for (username, rating) in rows {
        count += 1;
        body.push_str(&format!("{} {}\n", pad_cell(username, 20), strength_cell(rating, 15)));
    }

    if count == 0 {
        return info("No users registered.");
    }

    let heading = style(format!("{} {}", pad_cell("Username", 20), pad_cell("Password Strength", 17))).bold();
    format!(
        "{heading}\n{rule}\n{body}{rule}\n{total}",
        rule = rule(),
        total = info(&format!("Total users: {}", count)),
    )
}

pub fn generated_password(password: &str) -> String {
    success(&format!("Generated password: {}", style(password).bold()))
}

pub fn rename_summary(old: &str, new: &str) -> String {
    format!("Username: {}", style(format!("'{}' → '{}'", old, new)).bold())
}

pub fn strength_line(rating: Strength) -> String {
    format!("Password Strength: {}", strength(rating))
}
