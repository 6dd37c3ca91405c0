// Text segmentation and stagger timing for the split-text reveal.

/// Spaces inside character splits become NBSP so the spans keep their width.
pub const NBSP: char = '\u{a0}';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitKind {
    Chars,
    Words,
}

impl SplitKind {
    /// Parse a declarative `data-split-type` value; `None` on anything else.
    pub fn parse(raw: &str) -> Option<SplitKind> {
        match raw.trim() {
            "chars" => Some(SplitKind::Chars),
            "words" => Some(SplitKind::Words),
            _ => None,
        }
    }

    pub fn split(self, text: &str) -> Vec<String> {
        match self {
            SplitKind::Chars => split_chars(text),
            SplitKind::Words => split_words(text),
        }
    }
}

/// One segment per character, with plain spaces mapped to NBSP.
pub fn split_chars(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| if c == ' ' { NBSP.to_string() } else { c.to_string() })
        .collect()
}

/// One segment per whitespace-separated word.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Total reveal time for a staggered run: the last segment starts at
/// `segments × delay` and then plays for `duration`.
pub fn stagger_total_ms(segments: usize, delay_ms: u32, duration_ms: u32) -> u32 {
    segments as u32 * delay_ms + duration_ms
}
