//! Stock chatbot REPL
//!
//! Reads questions from stdin, routes them through the lexical extractor,
//! fetches the collected record from the service, and prints prose.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::debug;

use stockchat_chat::{ApiClient, ChatIntent, ConversationManager, QueryRouter, render};

#[derive(Parser, Debug)]
#[command(name = "stockchat")]
#[command(about = "Chat front end for the stockchat service", long_about = None)]
struct Args {
    /// Base URL of the stockchat API
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    api_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    stockchat_utils::init_tracing("warn");

    let args = Args::parse();
    let client = ApiClient::new(args.api_url)?;
    let router = QueryRouter::new();
    let mut conversation = ConversationManager::new();

    println!("{}", render::greeting());

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query == "/exit" || query == "/quit" {
            break;
        }

        let reply = respond(&client, router, &mut conversation, query).await;
        println!("{reply}");
    }

    Ok(())
}

/// Answer one chat message
async fn respond(
    client: &ApiClient,
    router: QueryRouter,
    conversation: &mut ConversationManager,
    query: &str,
) -> String {
    // Fall back to the symbol the conversation is already about
    let symbol = router
        .extract_symbol(query)
        .or_else(|| conversation.current_symbol().map(str::to_string));

    let Some(symbol) = symbol else {
        let reply = render::no_symbol_reply().to_string();
        conversation.add_turn(query.to_string(), reply.clone(), Vec::new());
        return reply;
    };

    let intent = router.classify(query);
    debug!(%symbol, ?intent, "routing query");

    // An un-understood query never reaches the service
    if intent == ChatIntent::Invalid {
        let reply = render::invalid_reply().to_string();
        conversation.add_turn(query.to_string(), reply.clone(), vec![symbol]);
        return reply;
    }

    let reply = match client.get_stock(&symbol).await {
        Ok(report) => render::render(intent, &report),
        Err(err) => format!("Error fetching data for {symbol}: {err}"),
    };

    conversation.add_turn(query.to_string(), reply.clone(), vec![symbol]);
    reply
}
