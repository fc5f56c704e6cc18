//! Dialog coordination between arbitrary callers and the modal renderer.
//!
//! Any part of the application can ask for a confirmation or notice through a
//! [`DialogCoordinator`] and await the user's answer without knowing how the
//! dialog is drawn. The single [`DialogHost`] owned by the renderer drains the
//! request queue in FIFO order and presents one dialog at a time; each request
//! carries its own one-shot responder, so an answer can only ever reach the
//! request it was given for.
//!
//! ```no_run
//! # async fn example() -> Result<(), taskdeck::dialog::DialogError> {
//! let (dialogs, mut host) = taskdeck::dialog::channel();
//! tokio::spawn(async move {
//!     host.next().await;
//!     host.respond(taskdeck::dialog::DialogResult::CONFIRMED).ok();
//! });
//! let answer = dialogs.confirm("Delete", "Sure?").await?;
//! assert!(answer.confirmed);
//! # Ok(())
//! # }
//! ```

use crate::constants::{DIALOG_CANCEL_LABEL, DIALOG_CONFIRM_LABEL, DIALOG_OK_LABEL};
use tokio::sync::{mpsc, oneshot, watch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Confirm,
    Alert,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub title: String,
    pub message: String,
    pub kind: DialogKind,
    pub confirm_label: String,
    /// Only confirmations offer a way out; notices have a single button.
    pub cancel_label: Option<String>,
}

impl DialogRequest {
    pub fn confirm(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: DialogKind::Confirm,
            confirm_label: DIALOG_CONFIRM_LABEL.to_string(),
            cancel_label: Some(DIALOG_CANCEL_LABEL.to_string()),
        }
    }

    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::notice(DialogKind::Alert, title, message)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::notice(DialogKind::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::notice(DialogKind::Error, title, message)
    }

    fn notice(kind: DialogKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
            confirm_label: DIALOG_OK_LABEL.to_string(),
            cancel_label: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogResult {
    pub confirmed: bool,
}

impl DialogResult {
    pub const CONFIRMED: Self = Self { confirmed: true };
    pub const CANCELLED: Self = Self { confirmed: false };
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogError {
    #[error("No dialog renderer is running")]
    NoRenderer,

    #[error("Dialog was dismissed before it was answered")]
    Dismissed,

    #[error("No dialog is waiting for an answer")]
    NoPendingDialog,
}

struct PendingDialog {
    request: DialogRequest,
    responder: oneshot::Sender<DialogResult>,
}

/// Creates a connected coordinator/host pair.
pub fn channel() -> (DialogCoordinator, DialogHost) {
    let (queue_tx, queue_rx) = mpsc::unbounded_channel();
    let (visible_tx, visible_rx) = watch::channel(None);

    (
        DialogCoordinator {
            queue: queue_tx,
            visible: visible_rx,
        },
        DialogHost {
            queue: queue_rx,
            current: None,
            visible: visible_tx,
        },
    )
}

/// Request side of the dialog channel. Cheap to clone.
#[derive(Clone)]
pub struct DialogCoordinator {
    queue: mpsc::UnboundedSender<PendingDialog>,
    visible: watch::Receiver<Option<DialogRequest>>,
}

impl DialogCoordinator {
    /// Queues `request` and waits for the user's answer.
    ///
    /// Fails with [`DialogError::NoRenderer`] when the host is gone, and with
    /// [`DialogError::Dismissed`] when the host goes away before answering.
    /// A live host that never answers keeps this future pending.
    pub async fn request(&self, request: DialogRequest) -> Result<DialogResult, DialogError> {
        let (responder, answer) = oneshot::channel();
        log::debug!("Dialog requested: {:?} '{}'", request.kind, request.title);

        self.queue
            .send(PendingDialog { request, responder })
            .map_err(|_| DialogError::NoRenderer)?;

        answer.await.map_err(|_| DialogError::Dismissed)
    }

    pub async fn confirm(&self, title: &str, message: &str) -> Result<DialogResult, DialogError> {
        self.request(DialogRequest::confirm(title, message)).await
    }

    pub async fn alert(&self, title: &str, message: &str) -> Result<DialogResult, DialogError> {
        self.request(DialogRequest::alert(title, message)).await
    }

    pub async fn success(&self, title: &str, message: &str) -> Result<DialogResult, DialogError> {
        self.request(DialogRequest::success(title, message)).await
    }

    pub async fn error(&self, title: &str, message: &str) -> Result<DialogResult, DialogError> {
        self.request(DialogRequest::error(title, message)).await
    }

    /// Observes the visible dialog; `None` means no dialog is shown.
    pub fn visibility(&self) -> watch::Receiver<Option<DialogRequest>> {
        self.visible.clone()
    }

    pub fn has_renderer(&self) -> bool {
        !self.queue.is_closed()
    }
}

/// Consumer side of the dialog channel, owned by the single modal renderer.
pub struct DialogHost {
    queue: mpsc::UnboundedReceiver<PendingDialog>,
    current: Option<PendingDialog>,
    visible: watch::Sender<Option<DialogRequest>>,
}

impl DialogHost {
    /// Presents the next queued request if nothing is visible.
    /// Returns the visible request, if any. Never blocks.
    pub fn poll(&mut self) -> Option<&DialogRequest> {
        self.drop_abandoned();
        while self.current.is_none() {
            match self.queue.try_recv() {
                Ok(pending) if pending.responder.is_closed() => continue,
                Ok(pending) => self.present(pending),
                Err(_) => break,
            }
        }
        self.current()
    }

    /// Waits until a request is visible and returns it.
    ///
    /// Returns `None` once every coordinator has been dropped and the queue
    /// is empty.
    pub async fn next(&mut self) -> Option<DialogRequest> {
        self.drop_abandoned();
        while self.current.is_none() {
            let pending = self.queue.recv().await?;
            // Skip requests whose caller stopped waiting while queued.
            if !pending.responder.is_closed() {
                self.present(pending);
            }
        }
        self.current().cloned()
    }

    pub fn current(&self) -> Option<&DialogRequest> {
        self.current.as_ref().map(|pending| &pending.request)
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Answers the visible request and hides it.
    pub fn respond(&mut self, result: DialogResult) -> Result<(), DialogError> {
        let pending = self.current.take().ok_or(DialogError::NoPendingDialog)?;
        log::debug!(
            "Dialog '{}' answered: confirmed={}",
            pending.request.title,
            result.confirmed
        );

        // The caller may have given up waiting; that is not the renderer's concern.
        let _ = pending.responder.send(result);
        self.visible.send_replace(None);
        Ok(())
    }

    /// Hides the visible dialog when its caller stopped waiting for it.
    fn drop_abandoned(&mut self) {
        if self.current.as_ref().is_some_and(|pending| pending.responder.is_closed()) {
            if let Some(pending) = self.current.take() {
                log::debug!("Dialog '{}' abandoned by its caller", pending.request.title);
            }
            self.visible.send_replace(None);
        }
    }

    fn present(&mut self, pending: PendingDialog) {
        self.visible.send_replace(Some(pending.request.clone()));
        self.current = Some(pending);
    }
}
