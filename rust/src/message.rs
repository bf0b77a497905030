use std::borrow::Cow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::emoji::is_single_emoji;
use crate::event::RawEvent;
use crate::lightning::{
    event_to_lightning_invoice, event_to_lightning_payment, LightningInvoice, LightningPayment,
};
use crate::tags::find_reply_to_id;
use crate::token::ContentToken;

const INVOICE_KEEP_CHARS: usize = 15;
const INVOICE_ELLIPSIS: &str = "...";

/// A raw event paired with the tokens the tokenizer produced for its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub event: Arc<RawEvent>,
    pub tokens: Vec<ContentToken>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub emoji: String,
    pub pubkey: String,
    pub event_id: String,
}

/// Presentation-ready view of one chat event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: String,
    pub pubkey: String,
    /// Content as displayed, with any embedded invoice shortened.
    pub content: String,
    pub created_at: i64,
    pub reply_to_id: Option<String>,
    /// Always empty here; filled by reaction aggregation.
    pub reactions: Vec<Reaction>,
    pub lightning_invoice: Option<LightningInvoice>,
    pub is_single_emoji: bool,
    pub lightning_payment: Option<LightningPayment>,
    pub is_mine: bool,
    pub event: Arc<RawEvent>,
    pub tokens: Vec<ContentToken>,
}

/// Lookups the normalizer delegates. Implementations must be pure.
pub trait MessageCollaborators {
    fn lightning_invoice(&self, event: &RawEvent) -> Option<LightningInvoice>;
    fn lightning_payment(&self, event: &RawEvent) -> Option<LightningPayment>;
    fn reply_to_id(&self, event: &RawEvent) -> Option<String>;
}

/// Reads invoices, payments and reply targets from event tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagCollaborators;

impl MessageCollaborators for TagCollaborators {
    fn lightning_invoice(&self, event: &RawEvent) -> Option<LightningInvoice> {
        event_to_lightning_invoice(event)
    }

    fn lightning_payment(&self, event: &RawEvent) -> Option<LightningPayment> {
        event_to_lightning_payment(event)
    }

    fn reply_to_id(&self, event: &RawEvent) -> Option<String> {
        find_reply_to_id(event)
    }
}

/// Shortens the first occurrence of `invoice` in `content` to its first and
/// last 15 chars around `...`. Borrows when there is nothing to replace.
pub fn content_to_show<'a>(content: &'a str, invoice: Option<&str>) -> Cow<'a, str> {
    let Some(invoice) = invoice.filter(|i| !i.is_empty()) else {
        return Cow::Borrowed(content);
    };
    let Some(start) = content.find(invoice) else {
        tracing::debug!(
            invoice_len = invoice.len(),
            "invoice not found in content; leaving unredacted"
        );
        return Cow::Borrowed(content);
    };

    let char_len = invoice.chars().count();
    let head: String = invoice.chars().take(INVOICE_KEEP_CHARS).collect();
    let tail: String = invoice
        .chars()
        .skip(char_len.saturating_sub(INVOICE_KEEP_CHARS))
        .collect();

    let end = start + invoice.len();
    let mut shown = String::with_capacity(content.len());
    shown.push_str(&content[..start]);
    shown.push_str(&head);
    shown.push_str(INVOICE_ELLIPSIS);
    shown.push_str(&tail);
    shown.push_str(&content[end..]);
    Cow::Owned(shown)
}

/// Normalize a message using the tag-based lookups.
pub fn message_to_chat_message(message: &Message, current_pubkey: Option<&str>) -> ChatMessage {
    message_to_chat_message_with(&TagCollaborators, message, current_pubkey)
}

pub fn message_to_chat_message_with<C>(
    collaborators: &C,
    message: &Message,
    current_pubkey: Option<&str>,
) -> ChatMessage
where
    C: MessageCollaborators + ?Sized,
{
    let event = &message.event;
    tracing::trace!(event_id = %event.id, "normalizing chat message");

    let reply_to_id = collaborators.reply_to_id(event);
    let is_mine = current_pubkey.is_some_and(|pk| pk == event.pubkey);
    let lightning_invoice = collaborators.lightning_invoice(event);
    let lightning_payment = collaborators.lightning_payment(event);
    let content = content_to_show(
        &event.content,
        lightning_invoice.as_ref().map(|i| i.invoice.as_str()),
    )
    .into_owned();
    let is_single_emoji = is_single_emoji(&content);

    ChatMessage {
        id: event.id.clone(),
        pubkey: event.pubkey.clone(),
        content,
        created_at: event.created_at,
        reply_to_id,
        reactions: vec![],
        lightning_invoice,
        is_single_emoji,
        lightning_payment,
        is_mine,
        event: Arc::clone(event),
        tokens: message.tokens.clone(),
    }
}
