// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use folio_core::preference::ThemeMode;

/// Theme argument of `:theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeArg {
    Set(ThemeMode),
    Toggle,
}

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the app
    Quit,
    // Toggle the help popup
    Help,
    // Switch or toggle the colour theme
    Theme(ThemeArg),
    // Subscribe an address to the newsletter
    Subscribe(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Blank input: close the bar without acting.
    #[error("")]
    Empty,
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown command: {0}")]
    Unknown(String),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "theme" => match rest {
                "" | "toggle" => Ok(Command::Theme(ThemeArg::Toggle)),
                "light" => Ok(Command::Theme(ThemeArg::Set(ThemeMode::Light))),
                "dark" => Ok(Command::Theme(ThemeArg::Set(ThemeMode::Dark))),
                _ => Err(CommandError::Usage("theme [light|dark|toggle]")),
            },
            "subscribe" => {
                if rest.is_empty() {
                    Err(CommandError::Usage("subscribe <email>"))
                } else {
                    Ok(Command::Subscribe(rest.to_string()))
                }
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
