//! ChatBird message list decoration.
//!
//! Given the ordered rows of a conversation, works out where date
//! separators, sender names and the read/delivery status marker go, which
//! messages show an avatar, and how much space follows each row.
//!
//! - Pure and synchronous: no I/O, no shared state
//! - Calendar days compared in a caller-chosen time zone (local by default)
//! - Synthetic rows get uids derived from their message, stable across passes

pub mod config;
pub mod decorator;
mod label;

pub use config::{ConfigError, DecoratorConfig};
pub use decorator::{Decorator, decorate};
