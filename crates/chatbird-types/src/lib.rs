//! ChatBird shared types.
//!
//! Plain data consumed and produced by the decorator and the channel
//! helpers. Nothing in here talks to a backend; messaging data is resolved
//! into these structs before it reaches the rest of the workspace.

pub mod decorated;
pub mod items;
pub mod models;

pub use decorated::DecoratedItem;
pub use items::{
    ChatItem, Message, MessageContent, MessageStatus, NameLabel, SenderInfo, StatusMarker,
    TimeSeparator,
};
pub use models::{ChannelContext, Member, User};
