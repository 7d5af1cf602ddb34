use std::time::Instant;

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::PrelaunchPage;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::PrelaunchApp;

#[derive(Debug, Parser)]
#[command(name = "pictura", about = "Pictura prelaunch page")]
struct Args {
    /// Base URL of the waitlist relay.
    #[arg(long, env = "PICTURA_RELAY_URL", default_value = "http://127.0.0.1:8888")]
    relay_url: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(args.relay_url, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Pictura")
            .with_inner_size([1180.0, 760.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Pictura",
        options,
        Box::new(|cc| {
            let page = PrelaunchPage::prelaunch(Instant::now())?;
            Ok(Box::new(PrelaunchApp::new(cc, page, cmd_tx, ui_rx)))
        }),
    )
}
