//! Text normalization and Unicode-safe measurement.
//!
//! Every splitting strategy in this crate runs on normalized text:
//! Unicode canonical composition (NFC) plus `\n` line endings. Without it,
//! `é` as a single code point and `é` as `e` + combining acute would count
//! and compare differently, and `\r\n` documents would defeat every
//! line-oriented separator.
//!
//! All sizes in this crate are **Unicode scalar counts**, never byte
//! counts: a chunk limit of 100 means 100 characters whether the text is
//! ASCII, Arabic, or emoji. The helpers here are the only place that maps
//! between char positions and byte offsets, so the splitters themselves can
//! never slice mid-code-point.

use std::borrow::Cow;

use unicode_normalization::{is_nfc, UnicodeNormalization};
use unicode_segmentation::UnicodeSegmentation;

/// Normalize text for consistent downstream processing.
///
/// Applies NFC canonical composition and converts `\r\n` and lone `\r`
/// to `\n`. Pure and idempotent; already-normalized text is returned
/// borrowed.
///
/// ```rust
/// use strata::normalize;
///
/// assert_eq!(normalize("Line 1\r\nLine 2\rLine 3"), "Line 1\nLine 2\nLine 3");
/// // e + combining acute composes to the single code point é
/// assert_eq!(normalize("Cafe\u{0301}"), "Café");
/// ```
#[must_use]
pub fn normalize(text: &str) -> Cow<'_, str> {
    if text.is_empty() {
        return Cow::Borrowed(text);
    }

    let needs_nfc = !is_nfc(text);
    let has_cr = text.contains('\r');
    if !needs_nfc && !has_cr {
        return Cow::Borrowed(text);
    }

    let composed: Cow<'_, str> = if needs_nfc {
        Cow::Owned(text.nfc().collect())
    } else {
        Cow::Borrowed(text)
    };

    if has_cr {
        Cow::Owned(composed.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Owned(composed.into_owned())
    }
}

/// RTL script ranges: Hebrew, Arabic (+ supplement, extended, presentation
/// forms), Syriac, Thaana, N'Ko, Samaritan.
const RTL_RANGES: &[(u32, u32)] = &[
    (0x0590, 0x05FF),
    (0x0600, 0x06FF),
    (0x0700, 0x074F),
    (0x0750, 0x077F),
    (0x0780, 0x07BF),
    (0x07C0, 0x07FF),
    (0x0800, 0x083F),
    (0x08A0, 0x08FF),
    (0xFB50, 0xFDFF),
    (0xFE70, 0xFEFF),
];

/// Whether the text contains any right-to-left characters.
///
/// Useful for callers that render chunks (direction markers, previews);
/// the splitters themselves are direction-agnostic.
#[must_use]
pub fn is_rtl(text: &str) -> bool {
    text.chars().any(|ch| {
        let cp = u32::from(ch);
        RTL_RANGES.iter().any(|&(start, end)| cp >= start && cp <= end)
    })
}

/// Count grapheme clusters (user-perceived characters).
///
/// Handles multi-code-point emoji, combining marks, and complex scripts
/// via UAX #29 extended grapheme clusters.
///
/// ```rust
/// use strata::count_graphemes;
///
/// assert_eq!(count_graphemes("Hello"), 5);
/// // family emoji: four code points joined by ZWJ, one cluster
/// assert_eq!(count_graphemes("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}"), 1);
/// ```
#[must_use]
pub fn count_graphemes(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Count Unicode scalar values. The size unit for every chunk bound and
/// overlap in this crate.
#[must_use]
pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}

/// Extract the substring spanning char positions `start..end`, clamped to
/// the text. Never splits a multi-byte character.
///
/// ```rust
/// use strata::substring;
///
/// assert_eq!(substring("Hello 世界", 6, 8), "世界");
/// assert_eq!(substring("abc", 2, 99), "c");
/// ```
#[must_use]
pub fn substring(text: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let byte_at = |pos: usize| {
        text.char_indices()
            .nth(pos)
            .map_or(text.len(), |(idx, _)| idx)
    };
    &text[byte_at(start)..byte_at(end)]
}

/// The suffix holding the last `n` chars of `text` (all of it when shorter).
pub(crate) fn char_suffix(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}
