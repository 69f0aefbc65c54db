// vailure-stylist/examples/stylist_chat.rs
// Console chat with the Vailure stylist
//
// Run: cargo run --example stylist_chat
// Requires GEMINI_API_KEY in the environment (or a .env file).
// Commands: /thinking toggles thinking mode, /quit exits.

use std::io::{self, Write};
use vailure_stylist::{ChatSession, StylistClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let client = StylistClient::from_env();
    let mut session = ChatSession::new();

    session.open();
    for msg in session.transcript() {
        println!("stylist: {}", msg.text);
    }

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "/quit" => break,
            "/thinking" => {
                let on = !session.thinking_mode();
                session.set_thinking_mode(on);
                println!("thinking mode: {}", if on { "on" } else { "off" });
                continue;
            }
            _ => {}
        }

        let before = session.transcript().len();
        if !session.send(&client, input).await {
            continue;
        }

        for msg in &session.transcript()[before..] {
            if !msg.is_from_user() {
                println!("stylist: {}", msg.text);
                for source in &msg.sources {
                    println!("  source: {} <{}>", source.title, source.uri);
                }
            }
        }
    }

    Ok(())
}
