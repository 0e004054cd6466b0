//! Live log fan-out for the developer log viewer.
//!
//! Every event emitted through `tracing` is formatted as a single line and
//! pushed to each connected viewer. Delivery to viewers is best-effort: a
//! viewer whose inbox is full misses the line, and the emitting call site is
//! never slowed down or failed because of it.
//!
//! # Example
//!
//! ```
//! use shared::devlog::{BroadcastLayer, Broadcaster};
//! use tracing_subscriber::layer::SubscriberExt;
//!
//! let broadcaster = Broadcaster::new();
//! let mut viewer = broadcaster.subscribe();
//!
//! let subscriber = tracing_subscriber::registry().with(BroadcastLayer::new(broadcaster.clone()));
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!(addr = ":8080", "starting server");
//! });
//!
//! let line = viewer.try_recv().unwrap();
//! assert!(line.ends_with("[INFO] starting server addr=:8080"));
//! ```

pub mod broadcaster;
pub mod layer;
pub mod record;

pub use broadcaster::{Broadcaster, Subscription, INBOX_CAPACITY};
pub use layer::BroadcastLayer;
pub use record::LogRecord;

/// First line every viewer receives after connecting.
pub const CONNECTED_SENTINEL: &str = "[connected to log stream]";
