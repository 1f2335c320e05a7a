use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;

use promptsmith_critic::Critic;
use promptsmith_logging::{LogEvent, Logger};

use crate::web;

pub struct ServeOptions {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    pub model: String,
}

pub async fn handle_serve_command(
    critic: Arc<dyn Critic>,
    logger: Logger,
    options: ServeOptions,
) -> Result<()> {
    let router = web::create_router(critic, logger, options.model.clone());

    let addr = format!("{}:{}", options.host, options.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind web server to {}", addr))?;

    eprintln!();
    logger.log(&LogEvent::ServerListening {
        address: addr.clone(),
        model: options.model.clone(),
    });
    eprintln!("  {} Press {} to stop", "->".dimmed(), "Ctrl+C".bold());
    eprintln!();

    if options.open_browser {
        let url = format!("http://{}", browser_host(&options.host, options.port));
        if let Err(e) = open::that(&url) {
            eprintln!("Failed to open browser: {} (open {} manually)", e, url);
        }
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")
}

/// Address a browser can reach; wildcard binds map to localhost
fn browser_host(host: &str, port: u16) -> String {
    match host {
        "0.0.0.0" | "::" | "[::]" => format!("localhost:{}", port),
        _ => format!("{}:{}", host, port),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        eprintln!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    eprintln!("\nShutting down...");
}
