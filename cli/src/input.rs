use std::io::Read;
use std::path::Path;

use anyhow::Context;
use chatview_core::{ContentToken, RawEvent};

fn read_source(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read event from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

pub fn read_event(path: &Path) -> anyhow::Result<RawEvent> {
    let json = read_source(path)?;
    RawEvent::from_json(json.trim()).with_context(|| format!("parse event {}", path.display()))
}

pub fn read_tokens(path: &Path) -> anyhow::Result<Vec<ContentToken>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read tokens {}", path.display()))?;
    ContentToken::list_from_json(&json)
        .with_context(|| format!("parse tokens {}", path.display()))
}
