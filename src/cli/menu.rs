// src/cli/menu.rs
use console::Term;
use inquire::{InquireError, Password, Select, Text};
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

use crate::cli::render;
use crate::core::config::Config;
use crate::core::registry::normalize_username;
use crate::core::{RegistryError, UserRegistry};
use crate::models::{Confirmation, PasswordSource, UserChange};

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Invalid option '{0}'! Please try again.")]
    InvalidMenuChoice(String),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] InquireError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type Result<T> = std::result::Result<T, MenuError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddUser,
    ViewUser,
    EditUser,
    RemoveUser,
    ListUsers,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddUser,
        MenuChoice::ViewUser,
        MenuChoice::EditUser,
        MenuChoice::RemoveUser,
        MenuChoice::ListUsers,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> &'static str {
        match self {
            MenuChoice::AddUser => "1",
            MenuChoice::ViewUser => "2",
            MenuChoice::EditUser => "3",
            MenuChoice::RemoveUser => "4",
            MenuChoice::ListUsers => "5",
            MenuChoice::Exit => "6",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddUser => "Add New User",
            MenuChoice::ViewUser => "View User Information",
            MenuChoice::EditUser => "Edit User",
            MenuChoice::RemoveUser => "Remove User",
            MenuChoice::ListUsers => "List All Users",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number() == s)
            .ok_or_else(|| MenuError::InvalidMenuChoice(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceOption {
    Generate,
    Manual,
}

impl fmt::Display for SourceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceOption::Generate => write!(f, "Auto-generate secure password"),
            SourceOption::Manual => write!(f, "Enter your own password"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditOption {
    Username,
    Password,
}

impl fmt::Display for EditOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOption::Username => write!(f, "Change username"),
            EditOption::Password => write!(f, "Change password"),
        }
    }
}

pub fn run_cli_menu<R: Rng>(
    registry: &mut UserRegistry<R>,
    config: &Config,
    should_exit: Arc<AtomicBool>,
) -> Result<()> {
    let term = Term::stdout();

    while !should_exit.load(Ordering::SeqCst) {
        if config.clear_screen {
            let _ = term.clear_screen();
        }
        println!(
            "{}",
            render::main_menu(MenuChoice::ALL.iter().map(|c| (c.number(), c.label())))
        );

        let input = match Text::new("Select an option (1-6):").prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled) => continue,
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        let choice = match input.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                println!("{}", render::error(&e.to_string()));
                pause(config);
                continue;
            }
        };
        log::debug!("Menu choice: {:?}", choice);

        let outcome = match choice {
            MenuChoice::AddUser => add_user(registry),
            MenuChoice::ViewUser => view_user(registry),
            MenuChoice::EditUser => edit_user(registry),
            MenuChoice::RemoveUser => remove_user(registry),
            MenuChoice::ListUsers => {
                list_users(registry);
                Ok(())
            }
            MenuChoice::Exit => {
                println!("{}", render::header("GOODBYE!"));
                println!("{}", render::success("Thank you for using User Management System!"));
                break;
            }
        };

        match outcome {
            Ok(()) => {}
            Err(MenuError::Registry(e)) => println!("{}", render::registry_error(&e)),
            Err(MenuError::Prompt(InquireError::OperationCanceled)) => {
                println!("{}", render::warning("Cancelled. Nothing changed."))
            }
            Err(MenuError::Prompt(InquireError::OperationInterrupted)) => break,
            Err(e) => return Err(e),
        }

        pause(config);
    }

    Ok(())
}

fn pause(config: &Config) {
    if config.pause_after_action {
        let _ = Text::new("Press Enter to continue...").prompt();
    }
}

fn prompt_username(message: &str) -> Result<String> {
    Ok(normalize_username(&Text::new(message).prompt()?))
}

// Loops on manual entry until the registry accepts the candidate
fn prompt_password_source<R: Rng>(
    registry: &UserRegistry<R>,
    replacing: Option<&str>,
) -> Result<PasswordSource> {
    let option = Select::new(
        "Choose password option:",
        vec![SourceOption::Generate, SourceOption::Manual],
    )
    .prompt()?;

    if option == SourceOption::Generate {
        println!("{}", render::info("Generating secure password..."));
        return Ok(PasswordSource::Generate);
    }

    loop {
        let password = Password::new("Enter password:")
            .with_display_mode(inquire::PasswordDisplayMode::Hidden)
            .without_confirmation()
            .prompt()?;

        match registry.check_manual_password(&password, replacing) {
            Ok(()) => return Ok(PasswordSource::Manual(password)),
            Err(e) => println!("{}", render::registry_error(&e)),
        }
    }
}

fn add_user<R: Rng>(registry: &mut UserRegistry<R>) -> Result<()> {
    println!("{}", render::header("USER REGISTRATION"));

    let username = registry.check_new_username(&prompt_username("Enter your Username:")?)?;
    let source = prompt_password_source(registry, None)?;
    let generated = source == PasswordSource::Generate;

    let user = registry.register(&username, source)?;
    if generated {
        println!("{}", render::generated_password(user.password()));
    }
    println!("{}", render::success(&format!("User '{}' registered successfully!", user.username())));
    println!("{}", render::strength_line(user.strength()));
    Ok(())
}

fn view_user<R: Rng>(registry: &UserRegistry<R>) -> Result<()> {
    println!("{}", render::header("USER INFORMATION"));

    let username = prompt_username("Enter Username:")?;
    let user = registry.lookup(&username)?;
    println!("{}", render::user_details(user));
    Ok(())
}

fn edit_user<R: Rng>(registry: &mut UserRegistry<R>) -> Result<()> {
    println!("{}", render::header("EDIT USER"));

    let old_username = prompt_username("Enter username to edit:")?;
    if !registry.exists(&old_username) {
        return Err(RegistryError::NotFound(old_username).into());
    }

    let option = Select::new(
        "What do you want to edit?",
        vec![EditOption::Username, EditOption::Password],
    )
    .prompt()?;

    match option {
        EditOption::Username => loop {
            let new_username = prompt_username("New username:")?;
            match registry.edit(&old_username, UserChange::RenameTo(new_username)) {
                Ok(user) => {
                    println!("{}", render::success("User updated successfully!"));
                    println!("{}", render::rename_summary(&old_username, user.username()));
                    return Ok(());
                }
                Err(e @ (RegistryError::EmptyInput(_) | RegistryError::DuplicateUsername(_))) => {
                    println!("{}", render::registry_error(&e));
                }
                Err(e) => return Err(e.into()),
            }
        },
        EditOption::Password => {
            let source = prompt_password_source(registry, Some(old_username.as_str()))?;
            let generated = source == PasswordSource::Generate;

            let user = registry.edit(&old_username, UserChange::SetPassword(source))?;
            if generated {
                println!("{}", render::generated_password(user.password()));
            }
            println!("{}", render::success("User updated successfully!"));
            println!("{}", render::strength_line(user.strength()));
            Ok(())
        }
    }
}

fn remove_user<R: Rng>(registry: &mut UserRegistry<R>) -> Result<()> {
    println!("{}", render::header("REMOVE USER"));

    let username = prompt_username("Enter username to remove:")?;
    if username.is_empty() {
        return Err(RegistryError::EmptyInput("Username").into());
    }
    if !registry.exists(&username) {
        return Err(RegistryError::NotFound(username).into());
    }

    let token = Text::new(&format!("Are you sure you want to delete '{}'? (y/N):", username)).prompt()?;

    let user = registry.remove(&username, Confirmation::from_token(&token))?;
    println!("{}", render::success(&format!("User '{}' deleted successfully.", user.username())));
    Ok(())
}

fn list_users<R: Rng>(registry: &UserRegistry<R>) {
    println!("{}", render::header("ALL USERS"));
    println!("{}", render::user_table(registry.list_all()));
}
