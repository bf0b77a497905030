use std::iter::Peekable;
use std::str::Chars;
use std::sync::OnceLock;

use regex::Regex;

const VARIATION_SELECTOR_16: char = '\u{FE0F}';
const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Unicode emoji property tables, borrowed from the regex crate's Unicode data
/// and queried one char at a time.
struct EmojiProperties {
    emoji: Regex,
    presentation: Regex,
    modifier: Regex,
}

fn properties() -> &'static EmojiProperties {
    static PROPS: OnceLock<EmojiProperties> = OnceLock::new();
    PROPS.get_or_init(|| EmojiProperties {
        emoji: Regex::new(r"^\p{Emoji}$").expect("valid emoji property regex"),
        presentation: Regex::new(r"^\p{Emoji_Presentation}$")
            .expect("valid emoji presentation regex"),
        modifier: Regex::new(r"^\p{Emoji_Modifier}$").expect("valid emoji modifier regex"),
    })
}

fn has_property(re: &Regex, c: char) -> bool {
    let mut buf = [0u8; 4];
    re.is_match(c.encode_utf8(&mut buf))
}

/// True when `s`, ignoring surrounding whitespace, is exactly one emoji:
/// a base (default emoji presentation, or any emoji char followed by U+FE0F),
/// any number of modifiers, and any number of further ZWJ-joined bases of the
/// same shape.
///
/// Regional-indicator flags are two unjoined bases and therefore classify
/// false; ZWJ flags such as the rainbow flag classify true.
pub fn is_single_emoji(s: &str) -> bool {
    // `\u{FEFF}` is not White_Space but is stripped as whitespace by chat clients.
    let trimmed = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let mut chars = trimmed.chars().peekable();

    if !take_emoji(&mut chars) {
        return false;
    }
    loop {
        match chars.next() {
            None => return true,
            Some(ZERO_WIDTH_JOINER) => {
                if !take_emoji(&mut chars) {
                    return false;
                }
            }
            Some(_) => return false,
        }
    }
}

/// Consumes one base plus trailing modifiers.
fn take_emoji(chars: &mut Peekable<Chars<'_>>) -> bool {
    let props = properties();
    let Some(base) = chars.next() else {
        return false;
    };

    if chars.peek() == Some(&VARIATION_SELECTOR_16) && has_property(&props.emoji, base) {
        chars.next();
    } else if !has_property(&props.presentation, base) {
        return false;
    }

    while chars
        .peek()
        .is_some_and(|&c| has_property(&props.modifier, c))
    {
        chars.next();
    }
    true
}
