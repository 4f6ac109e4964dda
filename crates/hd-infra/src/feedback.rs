//! Channel-backed feedback adapter.
//!
//! Alerts are pushed onto an unbounded channel; the embedding view layer
//! drains the receiver and renders them.

use tokio::sync::mpsc;
use tracing::warn;

use hd_core::ports::{Alert, FeedbackPort};

pub struct ChannelFeedback {
    tx: mpsc::UnboundedSender<Alert>,
}

impl ChannelFeedback {
    /// Create the adapter and the receiver the view layer drains.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Alert>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl FeedbackPort for ChannelFeedback {
    fn show_alert(&self, alert: Alert) {
        if self.tx.send(alert).is_err() {
            warn!("alert dropped, feedback receiver closed");
        }
    }
}
