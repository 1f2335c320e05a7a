mod config;
mod critique;
mod repl;
mod serve;
mod web;

#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::warn;

use promptsmith_credentials::{resolve_credential, API_KEY_VAR};
use promptsmith_critic::{Critic, CritiqueClient};
use promptsmith_logging::{init_tracing, LogEvent, LogFormat, Logger, Surface};

use crate::config::ProjectConfig;
use crate::serve::ServeOptions;

#[derive(Parser, Debug)]
#[command(
    name = "promptsmith",
    about = "Critique and rewrite prompts for large language models",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Working directory (default: current directory)
    #[arg(short = 'd', long, global = true)]
    working_dir: Option<PathBuf>,

    /// Model to use (overrides promptsmith.toml)
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    log_format: LogFormatChoice,

    /// Diagnostic log level (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive prompt loop (default)
    Repl,

    /// Critique a single prompt and exit
    Critique {
        /// Prompt text
        #[arg(short, long, conflicts_with = "prompt_file")]
        prompt: Option<String>,

        /// Read the prompt from a file
        #[arg(long)]
        prompt_file: Option<PathBuf>,

        /// Output the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the web form
    Serve {
        /// Address to bind (default: 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (default: 8501)
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not open a browser
        #[arg(long)]
        no_open: bool,
    },
}

/// Resolved entry point, chosen once at start-up
enum Driver {
    Repl,
    OneShot { prompt: String, json: bool },
    Web {
        host: String,
        port: u16,
        open_browser: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatChoice {
    Pretty,
    Json,
    Compact,
}

impl From<LogFormatChoice> for LogFormat {
    fn from(choice: LogFormatChoice) -> Self {
        match choice {
            LogFormatChoice::Pretty => LogFormat::Pretty,
            LogFormatChoice::Json => LogFormat::Json,
            LogFormatChoice::Compact => LogFormat::Compact,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Determine working directory
    let working_dir = match cli.working_dir.clone() {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    // Loaded before tracing so RUST_LOG may come from .env
    let env_file = working_dir.join(".env");
    let env_loaded = load_env_file(&env_file);

    let log_format: LogFormat = cli.log_format.into();
    init_tracing(&cli.log_level, log_format);
    let logger = Logger::new(log_format);

    if let Err(e) = env_loaded {
        warn!(path = %env_file.display(), error = %e, "Failed to load .env file");
    }

    let config = ProjectConfig::load(&working_dir)?.unwrap_or_default();
    // Pick the driver up front; the one-shot prompt is read before credentials
    let driver = match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => Driver::Repl,
        Command::Critique {
            prompt,
            prompt_file,
            json,
        } => Driver::OneShot {
            prompt: get_prompt(prompt.as_deref(), prompt_file.as_deref(), &working_dir)?,
            json,
        },
        Command::Serve {
            host,
            port,
            no_open,
        } => Driver::Web {
            host: config.host(host.as_deref()),
            port: config.port(port),
            open_browser: !no_open,
        },
    };

    let secrets_path = config.secrets_path(&working_dir);
    let Some(resolved) = resolve_credential(&secrets_path) else {
        logger.log(&LogEvent::CredentialMissing {
            sources: vec!["environment".into(), secrets_path.display().to_string()],
        });
        eprintln!("{}", missing_credential_message(&secrets_path).bright_red());
        std::process::exit(1);
    };
    logger.log(&LogEvent::CredentialResolved {
        source: resolved.source.clone(),
    });

    let settings = config.client_settings(cli.model.as_deref());
    let model = settings.model.clone();
    let critic: Arc<dyn Critic> = Arc::new(CritiqueClient::new(resolved.credential, settings));

    match driver {
        Driver::Repl => {
            let stdin = std::io::stdin();
            repl::run_repl(critic.as_ref(), &logger, stdin.lock(), std::io::stdout()).await
        }
        Driver::OneShot { prompt, json } => {
            let outcome =
                critique::run_logged(critic.as_ref(), &logger, Surface::OneShot, &prompt).await;
            let failed = outcome.is_failed();

            if json {
                let body = serde_json::json!({
                    "ok": !failed,
                    "result": outcome.into_text(),
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("{}", outcome);
            }

            if failed {
                std::process::exit(1);
            }
            Ok(())
        }
        Driver::Web {
            host,
            port,
            open_browser,
        } => {
            let options = ServeOptions {
                host,
                port,
                open_browser,
                model,
            };
            serve::handle_serve_command(critic, logger, options).await
        }
    }
}

/// Load `.env` into the process environment. Variables already set win.
///
/// Returns whether a file was loaded; a missing file is not an error.
fn load_env_file(path: &Path) -> Result<bool, dotenv::Error> {
    match dotenv::from_path(path) {
        Ok(()) => Ok(true),
        Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

fn get_prompt(
    prompt: Option<&str>,
    prompt_file: Option<&Path>,
    working_dir: &Path,
) -> Result<String> {
    // Prefer --prompt flag
    let text = if let Some(prompt) = prompt {
        prompt.to_string()
    } else if let Some(file) = prompt_file {
        let path = if file.is_absolute() {
            file.to_path_buf()
        } else {
            working_dir.join(file)
        };
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read prompt file {}", path.display()))?
    } else {
        anyhow::bail!("No prompt provided. Use --prompt or --prompt-file");
    };

    if !critique::is_submittable(&text) {
        anyhow::bail!("Please enter a prompt!");
    }
    Ok(text)
}

fn missing_credential_message(secrets_path: &Path) -> String {
    format!(
        "OpenAI API key not found! Please set it in your .env file or in {}.\n\
         Create a .env file with: {}=your-key-here",
        secrets_path.display(),
        API_KEY_VAR
    )
}
