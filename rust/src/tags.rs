use crate::event::RawEvent;

/// Chat replies quote their parent with a `q` tag (NIP-C7).
pub fn find_reply_to_id(event: &RawEvent) -> Option<String> {
    event
        .tag_value("q")
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}
