//! Interactive menu for converting numerals one at a time.
//!
//! The loop keeps running after conversion errors and only ends on Quit or Esc.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Select};

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ToNumeral,
    ToInt,
    Check,
    List,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::ToNumeral,
        MenuAction::ToInt,
        MenuAction::Check,
        MenuAction::List,
        MenuAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ToNumeral => "Convert a number to a numeral",
            Self::ToInt => "Convert a numeral to a number",
            Self::Check => "Check a numeral",
            Self::List => "List all numerals",
            Self::Quit => "Quit",
        }
    }

    /// Prompt for the text this action works on, if it needs any.
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            Self::ToNumeral => Some("Number (1-3999)"),
            Self::ToInt | Self::Check => Some("Numeral"),
            Self::List | Self::Quit => None,
        }
    }
}

/// Runs one menu action against already collected input.
pub fn run_action(session: &Session<'_>, action: MenuAction, input: &str) -> Result<String> {
    match action {
        MenuAction::ToNumeral => session.to_numeral(input),
        MenuAction::ToInt => session.to_int(input),
        MenuAction::Check => {
            let validity = session.check(input);
            session.render_check(&validity)
        }
        MenuAction::List => session.list(),
        MenuAction::Quit => Ok(String::new()),
    }
}

pub struct MenuCommand<'a> {
    session: Session<'a>,
}

impl<'a> MenuCommand<'a> {
    pub fn new(session: Session<'a>) -> Self {
        Self { session }
    }

    pub fn execute(&self) -> Result<()> {
        println!("{}", "Innumerati - Roman numeral converter".blue().bold());
        println!();

        let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

        loop {
            let selection = Select::new()
                .with_prompt("What would you like to do?")
                .items(&labels)
                .default(0)
                .interact_opt()
                .map_err(|e| anyhow::anyhow!("Selection failed: {}", e))?;

            let action = match selection {
                Some(index) => MenuAction::ALL[index],
                None => MenuAction::Quit,
            };
            if action == MenuAction::Quit {
                tracing::debug!("Menu closed");
                break;
            }

            let input = match action.prompt() {
                Some(prompt) => Input::<String>::new()
                    .with_prompt(prompt)
                    .allow_empty(true)
                    .interact_text()
                    .map_err(|e| anyhow::anyhow!("Input failed: {}", e))?,
                None => String::new(),
            };

            match run_action(&self.session, action, &input) {
                Ok(output) => println!("{} {}", "→".green(), output.cyan()),
                Err(e) => println!("{} {}", "✗".red().bold(), e),
            }
            println!();
        }

        Ok(())
    }
}
