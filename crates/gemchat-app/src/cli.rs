use clap::Parser;

/// GemChat — a terminal chat client for Google Gemini.
#[derive(Parser, Debug)]
#[command(name = "gemchat", version, about)]
pub struct Args {
    /// Sampling temperature for the session, 0.0 (deterministic) to 1.0 (most random).
    #[arg(short = 't', long, default_value_t = 0.5, value_parser = parse_temperature)]
    pub temperature: f64,

    /// Gemini model override (default: gemini-1.5-flash).
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

fn parse_temperature(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("temperature must be between 0.0 and 1.0, got {value}"))
    }
}

pub fn parse() -> Args {
    Args::parse()
}
