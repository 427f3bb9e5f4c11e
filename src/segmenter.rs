//! Heuristic splitting of free-text recipe instructions into steps.
//!
//! A step boundary is a line break, or an inline ordinal marker (`3.` or `3)`)
//! that starts a word and continues the numbering of the line. Bullet glyphs
//! are recognised at the start of a line. Markers opening a step are stripped
//! from its text; fragments that are nothing but markers and whitespace are
//! dropped. A number ending a sentence (`Bake at 180. Then cool`) stays in
//! the running text.

use log::debug;

use crate::config::SegmenterConfig;
use crate::model::Step;

/// Words covered by one timer interval
pub const WORDS_PER_INTERVAL: usize = 10;
/// Seconds added per started interval of words
pub const SECONDS_PER_INTERVAL: u32 = 30;
/// Upper bound for a step timer (10 minutes)
pub const MAX_STEP_TIMER_SECONDS: u32 = 600;

/// Instruction segmenter with a configurable bullet glyph set
#[derive(Debug, Clone)]
pub struct Segmenter {
    bullets: Vec<char>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Segmenter::new(&SegmenterConfig::default())
    }
}

impl Segmenter {
    pub fn new(config: &SegmenterConfig) -> Self {
        Segmenter {
            bullets: config.bullet_glyphs.clone(),
        }
    }

    /// Split `raw` into ordered steps.
    ///
    /// Blank or marker-only input yields an empty list, which callers treat
    /// as "no instructions".
    pub fn segment(&self, raw: &str) -> Vec<Step> {
        let steps: Vec<Step> = raw
            .split('\n')
            .flat_map(|line| self.split_inline_ordinals(line))
            .map(|fragment| self.strip_markers(fragment))
            .filter(|text| !text.is_empty())
            .map(|text| Step::new(text, estimate_timer_seconds(text)))
            .collect();

        debug!(
            "Segmented {} bytes of instructions into {} steps",
            raw.len(),
            steps.len()
        );
        steps
    }

    /// Remove leading bullets, ordinals and whitespace, then trim.
    fn strip_markers<'a>(&self, fragment: &'a str) -> &'a str {
        let mut rest = fragment.trim_start();

        loop {
            if let Some(c) = rest.chars().next() {
                if self.bullets.contains(&c) {
                    rest = rest[c.len_utf8()..].trim_start();
                    continue;
                }
            }
            match ordinal_len(rest) {
                Some(len) => rest = rest[len..].trim_start(),
                None => break,
            }
        }

        rest.trim_end()
    }

    /// Byte offset just past the leading whitespace and bullets of `line`.
    fn marker_start(&self, line: &str) -> usize {
        let mut rest = line.trim_start();
        while let Some(c) = rest.chars().next() {
            if !self.bullets.contains(&c) {
                break;
            }
            rest = rest[c.len_utf8()..].trim_start();
        }
        line.len() - rest.len()
    }

    /// Split a line before inline ordinal markers that open a new step.
    ///
    /// On a line that starts with a marker, a later marker splits when its
    /// number follows the previous one (`1. Mix 2. Knead`). On other lines it
    /// splits only after a finished sentence (`Mix well. 2. Knead`).
    fn split_inline_ordinals<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let mut pieces = Vec::new();
        let mut start = 0;
        let bytes = line.as_bytes();

        let lead = self.marker_start(line);
        let (mut last_number, mut i) = match ordinal_len(&line[lead..]) {
            Some(len) => (ordinal_number(&line[lead..], len), lead + len),
            None => (None, 0),
        };
        let mut at_word_start = i == 0;

        while i < bytes.len() {
            if at_word_start && bytes[i].is_ascii_digit() {
                if let Some(len) = ordinal_len(&line[i..]) {
                    let number = ordinal_number(&line[i..], len);
                    let opens_step = match (last_number, number) {
                        (Some(prev), Some(n)) => prev.checked_add(1) == Some(n),
                        (None, Some(_)) => ends_sentence(&line[start..i]),
                        _ => false,
                    };
                    if opens_step {
                        pieces.push(&line[start..i]);
                        start = i;
                        last_number = number;
                    }
                    i += len;
                    at_word_start = false;
                    continue;
                }
            }

            let c = match line[i..].chars().next() {
                Some(c) => c,
                None => break,
            };
            at_word_start = c.is_whitespace();
            i += c.len_utf8();
        }

        pieces.push(&line[start..]);
        pieces
    }
}

/// Segment with the default bullet glyph set.
pub fn segment(raw: &str) -> Vec<Step> {
    Segmenter::default().segment(raw)
}

/// 30 seconds per started group of ten words, capped at ten minutes.
pub fn estimate_timer_seconds(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    let intervals = u32::try_from(words.div_ceil(WORDS_PER_INTERVAL)).unwrap_or(u32::MAX);
    intervals
        .saturating_mul(SECONDS_PER_INTERVAL)
        .min(MAX_STEP_TIMER_SECONDS)
}

/// Byte length of an ordinal marker (`12.` / `12)`) at the start of `s`.
///
/// The marker must not run straight into another digit, so `1.5 cups` is
/// left alone.
fn ordinal_len(s: &str) -> Option<usize> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    match s.as_bytes().get(digits) {
        Some(b'.') | Some(b')') => {}
        _ => return None,
    }
    match s.as_bytes().get(digits + 1) {
        Some(b) if b.is_ascii_digit() => None,
        _ => Some(digits + 1),
    }
}

fn ordinal_number(s: &str, len: usize) -> Option<u64> {
    s[..len - 1].parse().ok()
}

fn ends_sentence(text: &str) -> bool {
    text.trim_end().ends_with(['.', '!', '?', ';', ':'])
}
