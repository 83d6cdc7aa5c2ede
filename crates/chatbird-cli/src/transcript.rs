use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use chatbird_types::{ChannelContext, ChatItem};

/// A conversation snapshot as read from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub current_user_id: String,
    pub channel: ChannelContext,
    #[serde(default)]
    pub items: Vec<ChatItem>,
}

impl Transcript {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read transcript {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("failed to parse transcript {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
