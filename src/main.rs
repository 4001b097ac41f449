use std::error::Error;

use clap::Parser;
use dotenvy::dotenv;
use rust_ws_chat::config::{self, ClientConfig};
use rust_ws_chat::network::ChatClient;
use rust_ws_chat::ui::ChatApp;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "rust_ws_chat", version, about = "WebSocket chat client")]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Chat server as host:port, overrides the config file
    #[arg(long, env = config::HOST_ENV_VAR, value_name = "HOST:PORT")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    // RUST_LOG controls verbosity
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config).with_host_override(cli.host)?;

    run_client(app_config).await
}

async fn run_client(app_config: ClientConfig) -> Result<(), Box<dyn Error>> {
    // UI -> Network
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Network -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    log::info!("Using chat server {}", app_config.host);

    tokio::spawn(async move {
        let client = ChatClient::new(app_config, event_tx, cmd_rx);
        if let Err(err) = client.run().await {
            log::error!("Network client terminated: {err}");
        }
    });

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Rust WS Chat",
        options,
        Box::new(move |cc| Ok(Box::new(ChatApp::new(cc, cmd_tx, event_rx)))),
    )?;

    Ok(())
}
