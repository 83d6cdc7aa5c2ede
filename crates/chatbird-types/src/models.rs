use serde::{Deserialize, Serialize};

/// A user as returned by the application user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
}

impl User {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            nickname: None,
            profile_url: None,
        }
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Nickname for display, or the user id when the nickname is missing or empty.
    pub fn display_name(&self) -> &str {
        match self.nickname.as_deref() {
            Some(nick) if !nick.is_empty() => nick,
            _ => &self.user_id,
        }
    }
}

/// Channel members carry the same identity fields as directory users.
pub type Member = User;

/// The slice of channel state the decorator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelContext {
    /// Number of members, current user included.
    pub member_count: usize,
}

impl ChannelContext {
    pub fn new(member_count: usize) -> Self {
        Self { member_count }
    }

    /// More than two members: read state is shown as a count instead of seen/unseen.
    pub fn is_multi_user_group(&self) -> bool {
        self.member_count > 2
    }
}
