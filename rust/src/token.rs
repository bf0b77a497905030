use serde::{Deserialize, Serialize};

use crate::event::EventError;

/// One parsed unit of message content, produced by the tokenizer upstream.
///
/// The normalizer never looks inside these; they ride along to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentToken {
    Text { text: String },
    Url { url: String },
    Hashtag { hashtag: String },
    /// NIP-21 `nostr:` reference (npub, nprofile, note, nevent, naddr).
    Nostr { uri: String },
    LightningInvoice { invoice: String },
    Cashu { token: String },
    Newline,
    Whitespace,
}

impl ContentToken {
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, EventError> {
        Ok(serde_json::from_str(json)?)
    }
}
