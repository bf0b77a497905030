mod input;

use std::path::PathBuf;

use anyhow::Context;
use chatview_core::{Message, message_to_chat_message};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "chatview",
    version,
    about = "Normalize a raw Nostr chat event into the chat view model"
)]
struct Cli {
    /// Event JSON file; `-` reads stdin.
    #[arg(long, default_value = "-")]
    event: PathBuf,

    /// JSON array of pre-parsed content tokens.
    #[arg(long)]
    tokens: Option<PathBuf>,

    /// Viewer pubkey (hex). Omit when signed out.
    #[arg(long, env = "CHATVIEW_VIEWER")]
    viewer: Option<String>,

    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(&cli)?;
    println!("{output}");
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let event = input::read_event(&cli.event)?;
    let tokens = match &cli.tokens {
        Some(path) => input::read_tokens(path)?,
        None => vec![],
    };
    tracing::debug!(event_id = %event.id, tokens = tokens.len(), "loaded event");

    let viewer = cli.viewer.as_deref().filter(|v| !v.trim().is_empty());
    let message = Message {
        event: event.into(),
        tokens,
    };
    let chat_message = message_to_chat_message(&message, viewer);

    let out = if cli.pretty {
        serde_json::to_string_pretty(&chat_message)
    } else {
        serde_json::to_string(&chat_message)
    };
    out.context("serialize chat message")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn parses_cli_flags() {
        let cli = Cli::try_parse_from([
            "chatview",
            "--event",
            "ev.json",
            "--viewer",
            "abc",
            "--pretty",
        ])
        .unwrap();
        assert_eq!(cli.event, PathBuf::from("ev.json"));
        assert_eq!(cli.viewer.as_deref(), Some("abc"));
        assert!(cli.pretty);
        assert!(cli.tokens.is_none());
    }

    #[test]
    fn run_normalizes_event_file() {
        let dir = tempfile::tempdir().unwrap();
        let event = write(
            &dir,
            "event.json",
            r#"{"id":"e1","pubkey":"abc","created_at":1000,"kind":9,"tags":[["q","p0"]],"content":" 🚀 "}"#,
        );
        let tokens = write(&dir, "tokens.json", r#"[{"type":"text","text":"🚀"}]"#);

        let cli = Cli {
            event,
            tokens: Some(tokens),
            viewer: Some("abc".to_string()),
            pretty: false,
        };
        let out: serde_json::Value = serde_json::from_str(&run(&cli).unwrap()).unwrap();

        assert_eq!(out["id"], "e1");
        assert_eq!(out["is_mine"], true);
        assert_eq!(out["is_single_emoji"], true);
        assert_eq!(out["reply_to_id"], "p0");
        assert_eq!(out["tokens"][0]["text"], "🚀");
    }

    #[test]
    fn blank_viewer_counts_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let event = write(
            &dir,
            "event.json",
            r#"{"id":"e1","pubkey":"abc","created_at":1,"content":"hi"}"#,
        );
        let cli = Cli {
            event,
            tokens: None,
            viewer: Some(" ".to_string()),
            pretty: true,
        };
        let out: serde_json::Value = serde_json::from_str(&run(&cli).unwrap()).unwrap();
        assert_eq!(out["is_mine"], false);
    }

    #[test]
    fn rejects_event_without_pubkey() {
        let dir = tempfile::tempdir().unwrap();
        let event = write(&dir, "event.json", r#"{"id":"e1","pubkey":"","created_at":1}"#);
        let cli = Cli {
            event,
            tokens: None,
            viewer: None,
            pretty: false,
        };
        assert!(run(&cli).is_err());
    }

    #[test]
    fn run_reports_missing_file() {
        let cli = Cli {
            event: PathBuf::from("/nonexistent/chatview-event.json"),
            tokens: None,
            viewer: None,
            pretty: false,
        };
        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("chatview-event.json"));
    }
}
