//! Command orchestration from UI actions to the backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext};

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), UiError> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err(UiError::from_message(
                UiErrorContext::General,
                "UI command queue is full; please retry",
            ))
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            Err(UiError::from_message(
                UiErrorContext::BackendStartup,
                "Backend command processor disconnected (possible startup failure)",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::UiErrorCategory;
    use crossbeam_channel::bounded;

    fn fetch() -> BackendCommand {
        BackendCommand::FetchList {
            server_url: "http://127.0.0.1:3000".to_string(),
        }
    }

    #[test]
    fn queues_command_when_there_is_room() {
        let (tx, rx) = bounded(1);
        dispatch_backend_command(&tx, fetch()).expect("queued");
        assert!(matches!(rx.try_recv(), Ok(BackendCommand::FetchList { .. })));
    }

    #[test]
    fn reports_full_queue() {
        let (tx, _rx) = bounded(1);
        dispatch_backend_command(&tx, fetch()).expect("first fits");
        let err = dispatch_backend_command(&tx, fetch()).expect_err("full");
        assert!(err.message().contains("queue is full"));
    }

    #[test]
    fn reports_disconnected_backend_as_transport_error() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let err = dispatch_backend_command(&tx, fetch()).expect_err("disconnected");
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err.context(), UiErrorContext::BackendStartup);
    }
}
