//! Terminal frontend for the fincat backend
//!
//! An interactive chat client: reads commands from stdin, sends them to the
//! server's `/chat` endpoint, and renders the reply plus the current stock
//! table after every exchange.
//!
//! # Usage
//!
//! ```bash
//! # Server must be running (see fincat-server)
//! cargo run --bin fincat -p fincat-cli -- --url http://127.0.0.1:8000
//! ```

mod client;
mod render;
mod transcript;

use clap::Parser;
use client::FincatClient;
use fincat_core::Command;
use std::env;
use std::io::{self, BufRead, Write};
use transcript::Transcript;

#[derive(Parser, Debug)]
#[command(name = "fincat")]
#[command(about = "Chat client for the fincat stock watchlist demo", long_about = None)]
struct Args {
    /// Base URL of the fincat server
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    url: String,
}

fn print_banner() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════╗
║                      Fincat Chat                         ║
║                                                          ║
║  Commands:                                               ║
║    add SYMBOL NAME PRICE   - track a stock               ║
║    update SYMBOL PRICE     - change a price              ║
║    remove SYMBOL           - stop tracking               ║
║    list                    - show the list               ║
║                                                          ║
║  Local:  help, history, exit                             ║
╚══════════════════════════════════════════════════════════╝
"#
    );
}

fn print_history(transcript: &Transcript) {
    if transcript.is_empty() {
        println!("No messages yet.\n");
        return;
    }
    for turn in transcript.last_turns(20) {
        println!("[{}] you: {}", turn.timestamp.format("%H:%M:%S"), turn.user_input);
        println!("          bot: {}", turn.reply);
    }
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .init();

    let args = Args::parse();

    print_banner();

    let client = FincatClient::new(&args.url)?;
    let mut transcript = Transcript::new();

    // Show the current list up front so the session starts synchronized
    match client.stocks().await {
        Ok(stocks) => println!("{}\n", render::stock_table(&stocks)),
        Err(e) => eprintln!("Could not reach {}: {e}\n", args.url),
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("fincat> ");
        stdout.flush()?;

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => {
                // EOF
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {e}");
                continue;
            }
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        // Local commands never reach the server
        match input.to_lowercase().as_str() {
            "exit" | "quit" => {
                println!("Goodbye!");
                break;
            }
            "help" => {
                println!("{}\n", Command::help_text());
                continue;
            }
            "history" => {
                print_history(&transcript);
                continue;
            }
            _ => {}
        }

        match client.chat(input).await {
            Ok(outcome) => {
                println!("{}\n", outcome.reply);
                println!("{}\n", render::stock_table(&outcome.stocks));
                transcript.add_turn(input.to_string(), outcome.reply);
            }
            Err(e) => {
                eprintln!("Error: {e}\n");
            }
        }
    }

    Ok(())
}
