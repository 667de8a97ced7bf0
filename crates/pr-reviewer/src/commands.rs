//! Shell commands
//!
//! A line of input parses into a [`Command`]. Executing a command against a
//! state snapshot either produces actions for the store or text to print.

use crate::actions::{Action, GlobalAction, PullRequestAction, ReviewAction, SettingsAction};
use crate::state::AppState;
use crate::views;
use review_stream::Provider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the given URL, or refetch the stored one
    Fetch(Option<String>),
    Files,
    Select(String),
    Diff,
    Review,
    ReviewAll,
    Show,
    Status,
    Provider(Provider),
    Model(String),
    Models,
    /// Empty value clears the token
    Token(String),
    Key(String),
    Help,
    Quit,
    Empty,
}

/// What the shell does with an executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Dispatch(Vec<Action>),
    Print(String),
    Quit,
}

pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (line, ""),
    };

    let command = match name.to_lowercase().as_str() {
        "" => Command::Empty,
        "fetch" | "open" => Command::Fetch((!arg.is_empty()).then(|| arg.to_string())),
        "files" | "ls" => Command::Files,
        "select" | "cd" => {
            if arg.is_empty() {
                return Err("Usage: select <filename|number>".to_string());
            }
            Command::Select(arg.to_string())
        }
        "diff" => Command::Diff,
        "review" => Command::Review,
        "review-all" | "reviewall" => Command::ReviewAll,
        "show" => Command::Show,
        "status" => Command::Status,
        "provider" => Command::Provider(arg.parse()?),
        "model" => {
            if arg.is_empty() {
                return Err("Usage: model <id|display name>".to_string());
            }
            Command::Model(arg.to_string())
        }
        "models" => Command::Models,
        "token" => Command::Token(arg.to_string()),
        "key" => Command::Key(arg.to_string()),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        // A bare PR URL is a fetch
        _ if line.starts_with("http://") || line.starts_with("https://") => {
            Command::Fetch(Some(line.to_string()))
        }
        other => {
            return Err(format!(
                "Unknown command: {}. Type 'help' for a list of commands.",
                other
            ))
        }
    };
    Ok(command)
}

pub fn execute(command: Command, state: &AppState) -> Result<Outcome, String> {
    let outcome = match command {
        Command::Empty => Outcome::Dispatch(Vec::new()),
        Command::Fetch(url) => {
            let mut actions = Vec::new();
            if let Some(url) = url {
                actions.push(Action::PullRequest(PullRequestAction::SetUrl(url)));
            }
            actions.push(Action::PullRequest(PullRequestAction::Fetch));
            Outcome::Dispatch(actions)
        }
        Command::Select(arg) => {
            let filename = resolve_file(state, &arg)?;
            Outcome::Dispatch(vec![Action::PullRequest(PullRequestAction::SelectFile(
                filename,
            ))])
        }
        Command::Review => Outcome::Dispatch(vec![Action::Review(ReviewAction::ReviewFile)]),
        Command::ReviewAll => Outcome::Dispatch(vec![Action::Review(ReviewAction::ReviewAll)]),
        Command::Provider(provider) => {
            Outcome::Dispatch(vec![Action::Settings(SettingsAction::SetProvider(
                provider,
            ))])
        }
        Command::Model(model) => {
            let action = if state.settings.provider.model_by_display_name(&model).is_some() {
                SettingsAction::SetModelByDisplayName(model)
            } else {
                SettingsAction::SetModel(model)
            };
            Outcome::Dispatch(vec![Action::Settings(action)])
        }
        Command::Token(token) => {
            Outcome::Dispatch(vec![Action::Settings(SettingsAction::SetGithubToken(
                token,
            ))])
        }
        Command::Key(key) => {
            Outcome::Dispatch(vec![Action::Settings(SettingsAction::SetApiKey(key))])
        }
        Command::Files => Outcome::Print(views::files(state)),
        Command::Diff => Outcome::Print(views::diff(state)),
        Command::Show => Outcome::Print(views::review(state)),
        Command::Status => Outcome::Print(views::status(state)),
        Command::Models => Outcome::Print(views::models(state)),
        Command::Help => Outcome::Print(views::HELP.to_string()),
        Command::Quit => Outcome::Quit,
    };
    Ok(outcome)
}

/// Exact filename first, then a 1-based position in the file list.
/// Anything else is passed through unchecked.
fn resolve_file(state: &AppState, arg: &str) -> Result<String, String> {
    let files = &state.pr_data.files;
    if files.iter().any(|f| f.filename == arg) {
        return Ok(arg.to_string());
    }
    match arg.parse::<usize>() {
        Ok(n) if (1..=files.len()).contains(&n) => Ok(files[n - 1].filename.clone()),
        Ok(n) => Err(format!("No file #{} ({} files loaded)", n, files.len())),
        Err(_) => Ok(arg.to_string()),
    }
}

/// Dispatched when the input ends or the user quits
pub fn quit_action() -> Action {
    Action::Global(GlobalAction::Quit)
}
