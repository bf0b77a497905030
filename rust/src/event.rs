use serde::{Deserialize, Serialize};

/// A raw Nostr event as handed to the chat layer.
///
/// Identifiers and keys are kept as opaque strings (lowercase hex when the
/// event came from `nostr`). Upstream validation is trusted: nothing here
/// checks signatures or that `id`/`content` are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    pub id: String,
    pub pubkey: String,
    pub created_at: i64,
    #[serde(default)]
    pub kind: u16,
    #[serde(default)]
    pub tags: Vec<Vec<String>>,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sig: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("invalid event json: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("event id is required")]
    MissingId,
    #[error("event pubkey is required")]
    MissingPubkey,
}

impl RawEvent {
    /// Parse a NIP-01 event object.
    pub fn from_json(json: &str) -> Result<Self, EventError> {
        let event: RawEvent = serde_json::from_str(json)?;
        if event.id.trim().is_empty() {
            return Err(EventError::MissingId);
        }
        if event.pubkey.trim().is_empty() {
            return Err(EventError::MissingPubkey);
        }
        Ok(event)
    }

    /// First tag whose name (element 0) is `name`.
    pub fn find_tag(&self, name: &str) -> Option<&[String]> {
        self.tags
            .iter()
            .find(|tag| tag.first().is_some_and(|n| n == name))
            .map(Vec::as_slice)
    }

    /// Element 1 of the first `name` tag.
    pub fn tag_value(&self, name: &str) -> Option<&str> {
        self.find_tag(name)
            .and_then(|tag| tag.get(1))
            .map(String::as_str)
    }
}

fn tags_to_vecs(tags: &nostr::Tags) -> Vec<Vec<String>> {
    tags.iter().map(|tag| tag.as_slice().to_vec()).collect()
}

impl From<&nostr::Event> for RawEvent {
    fn from(event: &nostr::Event) -> Self {
        Self {
            id: event.id.to_hex(),
            pubkey: event.pubkey.to_hex(),
            created_at: event.created_at.as_secs() as i64,
            kind: event.kind.as_u16(),
            tags: tags_to_vecs(&event.tags),
            content: event.content.clone(),
            sig: Some(event.sig.to_string()),
        }
    }
}

impl From<&nostr::UnsignedEvent> for RawEvent {
    fn from(event: &nostr::UnsignedEvent) -> Self {
        // Rumors without a computed id keep an empty one; callers decide.
        Self {
            id: event.id.map(|id| id.to_hex()).unwrap_or_default(),
            pubkey: event.pubkey.to_hex(),
            created_at: event.created_at.as_secs() as i64,
            kind: event.kind.as_u16(),
            tags: tags_to_vecs(&event.tags),
            content: event.content.clone(),
            sig: None,
        }
    }
}
