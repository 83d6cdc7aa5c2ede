use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use chatbird_types::User;

use crate::error::{ChannelError, SetupError};
use crate::members::GroupChannel;

/// Everything needed to create a group channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelParams {
    pub name: String,
    pub members: Vec<User>,
    /// Encoded cover image, already cropped by the caller.
    #[serde(default)]
    pub cover_image: Option<Vec<u8>>,
}

impl ChannelParams {
    pub fn new(name: impl Into<String>, members: Vec<User>) -> Self {
        Self {
            name: name.into(),
            members,
            cover_image: None,
        }
    }

    pub fn with_cover_image(mut self, image: Vec<u8>) -> Self {
        self.cover_image = Some(image);
        self
    }

    /// Whether `name` is acceptable as a channel name.
    pub fn is_valid_name(name: &str) -> bool {
        !name.trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if !Self::is_valid_name(&self.name) {
            return Err(SetupError::EmptyName);
        }
        if self.members.is_empty() {
            return Err(SetupError::NoMembers);
        }
        Ok(())
    }
}

/// Creates channels on the messaging backend.
pub trait ChannelCreator {
    fn create_channel(&mut self, params: &ChannelParams) -> Result<GroupChannel, ChannelError>;
}

/// Validates `params` and hands them to `creator`.
pub fn create_channel<C>(creator: &mut C, params: &ChannelParams) -> Result<GroupChannel, SetupError>
where
    C: ChannelCreator + ?Sized,
{
    params.validate()?;

    match creator.create_channel(params) {
        Ok(channel) => {
            info!(url = %channel.url, members = channel.members.len(), "channel created");
            Ok(channel)
        }
        Err(e) => {
            warn!(name = %params.name, error = %e, "channel creation failed");
            Err(e.into())
        }
    }
}
