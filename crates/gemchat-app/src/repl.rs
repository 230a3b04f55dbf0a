//! Interactive chat loop: reads user lines, sends them through the
//! session, and prints the timestamped transcript entries.

use std::io::Write;

use gemchat_ai::{
    ChatMessage, ChatSession, GeminiClient, GeminiConfig, ModelClient, Role, SendOutcome,
};

/// Everything needed to build (and rebuild, on `/clear`) a remote handle.
pub struct Settings {
    pub api_key: String,
    pub model: Option<String>,
    pub temperature: f64,
}

impl Settings {
    fn handle(&self) -> Box<dyn ModelClient> {
        let mut config = GeminiConfig::new(&self.api_key).with_temperature(self.temperature);
        if let Some(ref model) = self.model {
            config = config.with_model(model);
        }
        Box::new(GeminiClient::new(config))
    }
}

pub async fn run(settings: Settings) -> std::io::Result<()> {
    let mut session = ChatSession::new(settings.handle());

    println!("Chat with Gemini | type `exit` to end the chat.");
    println!("Commands: /clear (start over), /history (show the transcript)");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            // EOF — same as ending the chat
            println!();
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/clear" => {
                session.reset(settings.handle());
                println!("Chat cleared.");
                continue;
            }
            "/history" => {
                if session.message_count() == 0 {
                    println!("(no messages yet)");
                }
                for msg in session.transcript() {
                    println!("{}", format_message(msg));
                }
                continue;
            }
            _ => {}
        }

        match session.send(input).await {
            Ok(SendOutcome::Reply(_)) => {
                if let Some(msg) = session.transcript().last() {
                    println!("{}", format_message(msg));
                }
            }
            Ok(SendOutcome::SessionEnded) => {
                println!("Chat ended. Run gemchat again to start a new session.");
                break;
            }
            Err(e) => {
                tracing::warn!("Remote call failed: {e}");
                eprintln!("Error: {e}");
            }
        }
    }

    Ok(())
}

fn format_message(msg: &ChatMessage) -> String {
    let time = msg.timestamp.format("%H:%M:%S");
    match msg.role {
        Role::User => format!("You ({time}): {}", msg.text),
        Role::Model => format!("Gemini ({time}): {}", msg.text),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;

    fn message_at(role: Role, text: &str) -> ChatMessage {
        ChatMessage {
            role,
            text: text.to_string(),
            timestamp: Local.with_ymd_and_hms(2024, 7, 1, 14, 30, 5).unwrap(),
        }
    }

    #[test]
    fn user_message_rendered_with_timestamp() {
        let msg = message_at(Role::User, "hello");
        assert_eq!(format_message(&msg), "You (14:30:05): hello");
    }

    #[test]
    fn model_message_rendered_with_timestamp() {
        let msg = message_at(Role::Model, "hi there");
        assert_eq!(format_message(&msg), "Gemini (14:30:05): hi there");
    }

    #[test]
    fn settings_build_handle_at_requested_temperature() {
        let settings = Settings {
            api_key: "k".into(),
            model: None,
            temperature: 0.8,
        };
        assert_eq!(settings.handle().temperature(), 0.8);
    }
}
