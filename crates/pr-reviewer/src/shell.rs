//! Interactive line shell
//!
//! Reads commands from stdin and prints state changes published by the
//! store as they happen, including review text while it streams.

use crate::commands::{self, Outcome};
use crate::dispatcher::Dispatcher;
use crate::state::AppState;
use crate::views;
use anyhow::Context;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

pub async fn run(
    dispatcher: Dispatcher,
    state_rx: watch::Receiver<AppState>,
) -> anyhow::Result<()> {
    let printer = tokio::spawn(print_changes(state_rx.clone()));

    println!("PR Reviewer. Paste a pull request URL or type 'help'.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let outcome = commands::parse(&line)
            .and_then(|command| commands::execute(command, &state_rx.borrow()));

        match outcome {
            Ok(Outcome::Dispatch(actions)) => {
                for action in actions {
                    dispatcher.dispatch(action);
                }
            }
            Ok(Outcome::Print(text)) => println!("{}", text),
            Ok(Outcome::Quit) => break,
            Err(message) => println!("{}", message),
        }
    }

    log::info!("Shell closed");
    dispatcher.dispatch(commands::quit_action());
    printer.abort();
    Ok(())
}

/// Print the difference between consecutive published states
async fn print_changes(mut state_rx: watch::Receiver<AppState>) {
    let mut prev = state_rx.borrow_and_update().clone();

    while state_rx.changed().await.is_ok() {
        let next = state_rx.borrow_and_update().clone();
        let text = views::changes(&prev, &next);
        if !text.is_empty() {
            print!("{}", text);
            let _ = std::io::stdout().flush();
        }
        prev = next;
    }
}
