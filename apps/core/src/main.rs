// Nova V1 Front-End Entry Point
// Terminal stand-in for the chat widget: echo the user line, pause as if
// typing, print the reply.

mod backends;
mod brain;
mod config;
mod error;
mod models;
mod typing;

#[cfg(test)]
mod tests;

use anyhow::Context;
use backends::{HttpBackend, ReplyBackend, RuleBackend};
use config::Config;
use models::{Message, Role};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Shown in place of a reply when the backend fails.
const FALLBACK_REPLY: &str = "Something went wrong on my side. Try that again?";

/// Picks the reply backend from configuration: remote when a URL is set,
/// the built-in rule engine otherwise.
fn build_backend(config: &Config) -> Result<Box<dyn ReplyBackend>, error::AppError> {
    match &config.backend_url {
        Some(url) => {
            info!("Using remote reply backend at {}", url);
            Ok(Box::new(HttpBackend::new(
                url.clone(),
                config.request_timeout,
            )?))
        }
        None => {
            info!("Using built-in rule engine");
            Ok(Box::new(RuleBackend::new()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("Invalid configuration")?;
    let backend = build_backend(&config).context("Failed to build reply backend")?;

    run(backend).await.context("Chat loop failed")?;
    Ok(())
}

/// The chat loop: read a line, pause as if typing, print the reply.
async fn run(backend: Box<dyn ReplyBackend>) -> Result<(), error::AppError> {
    println!("Nova — your quick AI helper. Type a message; /history replays, /quit exits.");

    let stdin = io::stdin();
    let mut transcript: Vec<Message> = Vec::new();

    // One iteration per send: the loop is strictly sequential, so at most
    // one reply computation is ever in flight.
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let value = line.trim();

        match value {
            "" => continue, // no send on blank input
            "/quit" => break,
            "/history" => {
                for msg in &transcript {
                    println!("[{}] {}", msg.role, msg.content);
                }
                continue;
            }
            _ => {}
        }

        transcript.push(Message::new(Role::User, value));

        typing::simulate_thinking().await;

        let reply = match backend.generate_reply(value).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Reply generation failed: {}", e);
                FALLBACK_REPLY.to_string()
            }
        };

        println!("nova: {}", reply);
        transcript.push(Message::new(Role::Bot, reply));
    }

    Ok(())
}
