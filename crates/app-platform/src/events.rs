//! UI event source and dispatch
//!
//! The hosting page holds an [`EventEmitter`] and fires events into it as
//! they happen (page-ready once, clicks zero or more times). A behavior
//! unit implements [`EventHandler`] and is driven by [`EventSource::run`],
//! which delivers events serially: no two handler invocations ever
//! overlap, matching the cooperative single-threaded dispatch of the
//! environments this models.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur when emitting an event
#[derive(Debug, Error)]
pub enum EmitError {
    /// The dispatch loop has ended and no longer listens
    #[error("Event loop closed")]
    Closed,
}

/// Result type for event emission
pub type Result<T> = std::result::Result<T, EmitError>;

/// A UI event delivered by the hosting environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UiEvent {
    /// The page structure is fully parsed and ready. Fires once.
    Ready,
    /// The user activated the toggle control.
    ToggleClick,
}

/// Handler registered against a page's event source
///
/// Handlers receive events one at a time and run to completion before the
/// next event is delivered.
pub trait EventHandler: Send {
    /// React to a single UI event
    fn handle_event(&mut self, event: UiEvent);
}

/// Cloneable handle the hosting page uses to fire events
#[derive(Debug, Clone)]
pub struct EventEmitter {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl EventEmitter {
    /// Emit an event into the page's dispatch queue
    pub fn emit(&self, event: UiEvent) -> Result<()> {
        self.tx.send(event).map_err(|_| EmitError::Closed)
    }

    /// Signal that the page structure is ready
    pub fn ready(&self) -> Result<()> {
        self.emit(UiEvent::Ready)
    }

    /// Signal an activation of the toggle control
    pub fn click(&self) -> Result<()> {
        self.emit(UiEvent::ToggleClick)
    }
}

/// Channel-backed source of UI events for one page
pub struct EventSource {
    rx: mpsc::UnboundedReceiver<UiEvent>,
}

impl EventSource {
    /// Create an event source and the emitter handle that feeds it
    pub fn new() -> (Self, EventEmitter) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { rx }, EventEmitter { tx })
    }

    /// Receive the next event, or `None` once every emitter is dropped
    pub async fn next_event(&mut self) -> Option<UiEvent> {
        self.rx.recv().await
    }

    /// Drain events into a handler until the page goes away
    ///
    /// The loop ends when every [`EventEmitter`] clone has been dropped.
    /// Returns the handler so callers can inspect it afterwards.
    pub async fn run<H: EventHandler>(mut self, mut handler: H) -> H {
        while let Some(event) = self.rx.recv().await {
            handler.handle_event(event);
        }
        handler
    }
}
