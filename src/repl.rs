//! Interactive prompt loop and input tokenization
//!
//! Reads lines from stdin, normalizes them into tokens, and dispatches the
//! first token as a command against the session state. Command failures are
//! printed and the loop continues; `exit` or end of input ends the session.

use std::io::{self, Write};

use tokio::io::AsyncBufReadExt;

use crate::app::App;
use crate::commands::Command;

const PROMPT: &str = "Pokedex > ";

/// Normalizes a raw input line into lowercase, whitespace-separated tokens.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Runs the interactive session until `exit` or EOF.
///
/// Shuts the session down gracefully on the way out, which stops the cache
/// sweeper before the process exits.
pub async fn run(mut app: App) -> io::Result<()> {
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{PROMPT}");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // EOF: treat like exit, but without the farewell
            break;
        };
        let tokens = clean_input(&line);
        let Some((name, args)) = tokens.split_first() else {
            continue;
        };

        match Command::parse(name) {
            Some(command) => {
                if let Err(err) = app.dispatch(command, args).await {
                    println!("{err}");
                }
            }
            None => println!("Unknown command"),
        }

        if app.should_quit {
            break;
        }
    }

    app.shutdown().await;
    Ok(())
}
