mod cli;
mod repl;

use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    // Try common locations for .env relative to the workspace
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root (gemchat/) — two levels up from crates/gemchat-app/
        manifest_dir.join("..").join("..").join(".env"),
        // Current directory
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file before anything else
    load_dotenv();

    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("gemchat=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "gemchat=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("GemChat v{} starting...", env!("CARGO_PKG_VERSION"));

    // The API key is the one mandatory piece of configuration; without it
    // there is nothing useful this process can do.
    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            tracing::error!("GEMINI_API_KEY is not set (env or .env); aborting");
            std::process::exit(1);
        }
    };

    let settings = repl::Settings {
        api_key,
        model: args.model,
        temperature: args.temperature,
    };
    tracing::info!(
        temperature = settings.temperature,
        model = settings.model.as_deref().unwrap_or("gemini-1.5-flash"),
        "Session configured"
    );

    if let Err(e) = repl::run(settings).await {
        tracing::error!("REPL error: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
