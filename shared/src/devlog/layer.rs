//! `tracing` layer feeding the broadcaster.

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use super::broadcaster::Broadcaster;
use super::record::LogRecord;

/// A tracing layer that copies every event to the live log viewers.
///
/// Stack it next to the console `fmt` layer; both see every event and the
/// console output is unaffected by slow or disconnected viewers.
#[derive(Clone, Debug)]
pub struct BroadcastLayer {
    broadcaster: Broadcaster,
}

impl BroadcastLayer {
    /// Creates a layer that publishes to `broadcaster`.
    #[must_use]
    pub fn new(broadcaster: Broadcaster) -> Self {
        Self { broadcaster }
    }

    /// Returns the broadcaster this layer publishes to.
    #[must_use]
    pub fn broadcaster(&self) -> &Broadcaster {
        &self.broadcaster
    }
}

impl<S> Layer<S> for BroadcastLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let record = LogRecord::from_event(event, Local::now());
        self.broadcaster.broadcast(&record.to_line());
    }
}
