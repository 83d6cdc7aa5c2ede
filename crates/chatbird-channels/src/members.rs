use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chatbird_types::{ChannelContext, ChatItem, Member, Message, SenderInfo};

/// Title shown for a channel with nobody but the current user in it.
pub const WAITING_FOR_PARTICIPANTS: &str = "Waiting for Participants...";

/// Group channel state as resolved from the messaging backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupChannel {
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    pub members: Vec<Member>,
    /// Latest read position per member user id.
    #[serde(default)]
    pub read_cursors: HashMap<String, DateTime<Utc>>,
}

impl GroupChannel {
    pub fn new(url: impl Into<String>, members: Vec<Member>) -> Self {
        Self {
            url: url.into(),
            members,
            ..Self::default()
        }
    }

    pub fn member(&self, user_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.user_id == user_id)
    }

    /// Everyone except the current user, in channel order.
    pub fn other_members(&self, current_user_id: &str) -> Vec<&Member> {
        self.members
            .iter()
            .filter(|m| m.user_id != current_user_id)
            .collect()
    }

    /// The current user's record first (when they are a member), then everyone else.
    pub fn all_members(&self, current_user_id: &str) -> Vec<&Member> {
        let mut all = self.other_members(current_user_id);
        if let Some(me) = self.member(current_user_id) {
            all.insert(0, me);
        }
        all
    }

    /// Channel title built from the other members' nicknames.
    ///
    /// With one other member this is their full nickname. With several it is
    /// their first names, ordered by last name.
    pub fn members_title(&self, current_user_id: &str) -> String {
        let others = self.other_members(current_user_id);
        match others.len() {
            0 => WAITING_FOR_PARTICIPANTS.to_string(),
            1 => others
                .iter()
                .filter_map(|m| m.nickname.as_deref())
                .collect::<Vec<_>>()
                .join(", "),
            _ => {
                let mut names: Vec<Vec<&str>> = others
                    .iter()
                    .filter_map(|m| m.nickname.as_deref())
                    .map(|nick| nick.split(' ').collect())
                    .collect();
                names.sort_by(|a, b| {
                    let last_a = a.last().copied().unwrap_or("");
                    let last_b = b.last().copied().unwrap_or("");
                    last_a.cmp(last_b)
                });
                names
                    .iter()
                    .filter_map(|parts| parts.first().copied())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }
    }

    pub fn context(&self) -> ChannelContext {
        ChannelContext::new(self.members.len().max(1))
    }

    /// Records that `user_id` has read everything up to `at`. Cursors never move backwards.
    pub fn mark_read(&mut self, user_id: &str, at: DateTime<Utc>) {
        let cursor = self.read_cursors.entry(user_id.to_string()).or_insert(at);
        if *cursor < at {
            *cursor = at;
        }
    }

    /// Members other than the sender whose read cursor has reached the message.
    pub fn read_count(&self, message: &Message) -> u32 {
        let count = self
            .members
            .iter()
            .filter(|m| m.user_id != message.sender_id)
            .filter(|m| {
                self.read_cursors
                    .get(&m.user_id)
                    .is_some_and(|cursor| *cursor >= message.date)
            })
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Sender identity for a message authored by a channel member.
    /// Messages from non-members (admin and system messages) get `None`.
    pub fn sender_info(&self, message: &Message) -> Option<SenderInfo> {
        let member = self.member(&message.sender_id)?;
        Some(SenderInfo {
            display_name: Some(member.display_name().to_string()),
            read_count: self.read_count(message),
        })
    }

    /// Prepares backend messages for decoration: sets direction relative to
    /// the current user and attaches sender identity and read counts.
    pub fn resolve_messages(
        &self,
        messages: impl IntoIterator<Item = Message>,
        current_user_id: &str,
    ) -> Vec<ChatItem> {
        messages
            .into_iter()
            .map(|mut message| {
                message.is_incoming = message.sender_id != current_user_id;
                message.sender = self.sender_info(&message);
                ChatItem::Message(message)
            })
            .collect()
    }
}

/// Up to two initials for an avatar placeholder: the first letter of the
/// first and last name components, uppercased.
pub fn initials_for(name: &str) -> String {
    let upper = name.to_uppercase();
    let components: Vec<&str> = upper
        .split(|c: char| !c.is_alphabetic())
        .filter(|part| !part.is_empty())
        .collect();

    let first = components.first().and_then(|c| c.chars().next());
    let last = if components.len() > 1 {
        components.last().and_then(|c| c.chars().next())
    } else {
        None
    };
    first.into_iter().chain(last).collect()
}
