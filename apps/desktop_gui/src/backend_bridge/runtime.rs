//! Backend worker: owns a tokio runtime and the relay client, and answers UI
//! commands over the event channel.

use std::thread;

use client_core::{SubmissionOutcome, WaitlistClient, WaitlistTransport};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

const RELAY_UNAVAILABLE: &str = "The waitlist service is unavailable right now.";

pub fn launch(relay_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        let client = match WaitlistClient::new(&relay_url) {
            Ok(client) => {
                tracing::info!(endpoint = %client.endpoint(), "backend worker ready");
                Some(client)
            }
            Err(err) => {
                tracing::error!(%relay_url, "invalid relay url: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "invalid relay url '{relay_url}': {err}"
                )));
                None
            }
        };

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::SubmitEmail { email } => {
                        let outcome = match &client {
                            Some(client) => SubmissionOutcome::from(client.submit(&email).await),
                            None => SubmissionOutcome::Failed {
                                message: Some(RELAY_UNAVAILABLE.to_string()),
                            },
                        };
                        if ui_tx.send(UiEvent::SubmissionFinished(outcome)).is_err() {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("backend command channel closed");
        });
    });
}
