//! Dispatcher for middleware action dispatch
//!
//! Background tasks spawned by middleware report back through the
//! Dispatcher. Dispatched actions are queued on the store's channel and go
//! through the full middleware chain and the reducer, one at a time.

use crate::actions::Action;
use tokio::sync::mpsc::UnboundedSender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: UnboundedSender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's action channel
    pub fn new(action_tx: UnboundedSender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for processing
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {:?}", e.0);
        }
    }
}
