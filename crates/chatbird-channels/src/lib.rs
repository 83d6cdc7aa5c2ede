//! ChatBird channel helpers.
//!
//! View-model logic around a group channel: member names and ordering,
//! read counts from member read cursors, and the new-conversation flow
//! (user picker plus validated channel creation). Backend access goes
//! through the `UserDirectory` and `ChannelCreator` traits.

pub mod directory;
pub mod error;
pub mod members;
pub mod picker;
pub mod setup;

pub use directory::{StaticDirectory, UserDirectory, UserListQuery, UserPage};
pub use error::{ChannelError, DirectoryError, SetupError};
pub use members::{GroupChannel, initials_for};
pub use picker::UserPicker;
pub use setup::{ChannelCreator, ChannelParams, create_channel};
