use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anything that can occupy a row in the message list.
///
/// Messages come from the backend; `TimeSeparator`, `NameLabel` and
/// `StatusMarker` are inserted by the decorator. `Other` covers rows the
/// decorator has no special handling for (typing indicators, load-more
/// spinners and so on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatItem {
    Message(Message),
    TimeSeparator(TimeSeparator),
    NameLabel(NameLabel),
    StatusMarker(StatusMarker),
    Other { uid: String, kind: String },
}

impl ChatItem {
    pub fn uid(&self) -> &str {
        match self {
            Self::Message(m) => &m.uid,
            Self::TimeSeparator(t) => &t.uid,
            Self::NameLabel(n) => &n.uid,
            Self::StatusMarker(s) => &s.uid,
            Self::Other { uid, .. } => uid,
        }
    }

    pub fn as_message(&self) -> Option<&Message> {
        match self {
            Self::Message(m) => Some(m),
            _ => None,
        }
    }

    /// True for rows the decorator inserts itself.
    pub fn is_decoration(&self) -> bool {
        matches!(
            self,
            Self::TimeSeparator(_) | Self::NameLabel(_) | Self::StatusMarker(_)
        )
    }
}

impl From<Message> for ChatItem {
    fn from(message: Message) -> Self {
        Self::Message(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    Pending,
    Sent,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessageContent {
    Text { text: String },
    Media { url: String, mime_type: String },
}

/// Sender identity attached to user-authored messages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SenderInfo {
    #[serde(default)]
    pub display_name: Option<String>,
    /// Members other than the sender who have read the message.
    #[serde(default)]
    pub read_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub uid: String,
    pub sender_id: String,
    pub date: DateTime<Utc>,
    pub is_incoming: bool,
    pub status: MessageStatus,
    pub content: MessageContent,
    /// `None` for admin/system messages.
    #[serde(default)]
    pub sender: Option<SenderInfo>,
}

impl Message {
    pub fn text(
        uid: impl Into<String>,
        sender_id: impl Into<String>,
        date: DateTime<Utc>,
        is_incoming: bool,
        text: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            sender_id: sender_id.into(),
            date,
            is_incoming,
            status: MessageStatus::Sent,
            content: MessageContent::Text { text: text.into() },
            sender: None,
        }
    }

    pub fn with_sender(mut self, sender: SenderInfo) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn with_status(mut self, status: MessageStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_user_message(&self) -> bool {
        self.sender.is_some()
    }

    pub fn sender_display_name(&self) -> Option<&str> {
        self.sender.as_ref()?.display_name.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeparator {
    pub uid: String,
    /// Weekday and date, already formatted for display.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameLabel {
    pub uid: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMarker {
    pub uid: String,
    pub status: MessageStatus,
    pub is_multi_user_group: bool,
    pub seen_count: u32,
}
