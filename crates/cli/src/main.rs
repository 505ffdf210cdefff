//! Terminal status display.
//!
//! Fetches the backend status once per trigger and renders it. A transport
//! failure is logged and the previously rendered status stays as-is; the
//! only user-visible error channel is the `error` field the backend reports.

use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "status-cli")]
#[command(about = "Displays backend and database status", long_about = None)]
struct Cli {
    /// Base URL of the status server
    #[arg(short, long, default_value = "http://localhost:4000")]
    url: String,

    /// Refresh every N seconds instead of fetching once
    #[arg(short, long)]
    watch: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusResponse {
    message: String,
    database_connected: bool,
    error: Option<String>,
}

/// Local view state: the last successfully fetched status.
#[derive(Default)]
struct StatusView {
    current: Option<StatusResponse>,
}

impl StatusView {
    fn update(&mut self, status: StatusResponse) {
        self.current = Some(status);
    }

    fn render(&self) {
        let Some(status) = &self.current else {
            println!("no status fetched yet");
            return;
        };
        println!("backend:  {}", status.message);
        println!(
            "database: {}",
            if status.database_connected {
                "connected"
            } else {
                "disconnected"
            }
        );
        match &status.error {
            Some(err) => println!("error:    {err}"),
            None => println!("error:    none"),
        }
    }
}

async fn fetch_status(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<StatusResponse, reqwest::Error> {
    client
        .get(format!("{base_url}/api/message"))
        .send()
        .await?
        .json()
        .await
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let mut view = StatusView::default();

    loop {
        match fetch_status(&client, &cli.url).await {
            Ok(status) => {
                view.update(status);
                view.render();
            }
            Err(err) => {
                // Transport failure: keep whatever was rendered last.
                tracing::warn!(error = %err, "failed to fetch status");
            }
        }

        match cli.watch {
            Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
            None => break,
        }
    }
}
