//! Turns raw Nostr chat events into the view model the chat UI renders.
//!
//! Everything here is pure: no I/O, no shared mutable state. The same event,
//! tokens and viewer always produce an equal [`ChatMessage`].

mod emoji;
mod event;
mod lightning;
mod message;
mod tags;
mod token;

pub use emoji::is_single_emoji;
pub use event::{EventError, RawEvent};
pub use lightning::{
    event_to_lightning_invoice, event_to_lightning_payment, LightningInvoice, LightningPayment,
};
pub use message::{
    content_to_show, message_to_chat_message, message_to_chat_message_with, ChatMessage, Message,
    MessageCollaborators, Reaction, TagCollaborators,
};
pub use tags::find_reply_to_id;
pub use token::ContentToken;
