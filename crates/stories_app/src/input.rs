use stories_core::{AppViewModel, Msg};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the term and submit it in one go.
    Search(String),
    Edit(String),
    Submit,
    /// Dismiss the item at a 1-based row.
    Dismiss(usize),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command `{0}`, try /help")]
    UnknownCommand(String),
    #[error("`/dismiss` needs a row number, got `{0}`")]
    InvalidRow(String),
    #[error("no story at row {0}")]
    NoSuchRow(usize),
    #[error("type a search term first")]
    EmptySearch,
    #[error("stories are still loading")]
    StillLoading,
}

/// Parses one line of input. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Some(Command::Search(line.to_string())));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    let command = match name {
        "edit" => Command::Edit(arg.to_string()),
        "submit" => Command::Submit,
        "dismiss" => {
            let row = arg
                .parse::<usize>()
                .ok()
                .filter(|row| *row > 0)
                .ok_or_else(|| InputError::InvalidRow(arg.to_string()))?;
            Command::Dismiss(row)
        }
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "q" => Command::Quit,
        other => return Err(InputError::UnknownCommand(format!("/{other}"))),
    };
    Ok(Some(command))
}

/// Turns a user intent into core messages, enforcing what the view disables.
pub fn to_msgs(command: Command, view: &AppViewModel) -> Result<Vec<Msg>, InputError> {
    match command {
        Command::Search(term) => {
            if term.is_empty() {
                return Err(InputError::EmptySearch);
            }
            Ok(vec![Msg::TermChanged(term), Msg::SearchSubmitted])
        }
        Command::Edit(term) => Ok(vec![Msg::TermChanged(term)]),
        Command::Submit => {
            if !view.can_submit {
                return Err(InputError::EmptySearch);
            }
            Ok(vec![Msg::SearchSubmitted])
        }
        Command::Dismiss(_) if view.is_loading => Err(InputError::StillLoading),
        Command::Dismiss(row) => view
            .item_at_row(row)
            .map(|item| vec![Msg::RemoveClicked(item.id.clone())])
            .ok_or(InputError::NoSuchRow(row)),
        Command::Show | Command::Help | Command::Quit => Ok(Vec::new()),
    }
}
