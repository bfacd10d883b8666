//! Runtime bridge between the UI command queue and backend event intake.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use undo_core::{HttpListSource, ListSource};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn spawn_backend_thread(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::LoadFailed(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: {err}"),
                )));
                return;
            }
        };

        while let Ok(cmd) = cmd_rx.recv() {
            let event = match cmd {
                BackendCommand::FetchList { server_url } => {
                    runtime.block_on(fetch_list(&server_url))
                }
            };
            if ui_tx.send(event).is_err() {
                tracing::debug!("ui event receiver dropped; stopping backend worker");
                break;
            }
        }
    });
}

async fn fetch_list(server_url: &str) -> UiEvent {
    let result = match HttpListSource::new(server_url) {
        Ok(source) => source.fetch().await,
        Err(err) => Err(err),
    };
    match result {
        Ok(items) => {
            tracing::info!(len = items.len(), "fetched undo list");
            UiEvent::ListLoaded(items)
        }
        Err(err) => {
            tracing::error!(%err, "failed to fetch undo list");
            UiEvent::LoadFailed(UiError::from_fetch_error(&err))
        }
    }
}
