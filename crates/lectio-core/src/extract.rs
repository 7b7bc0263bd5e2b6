//! Reference extraction from upstream generator HTML.
//!
//! The upstream site's markup is not contractually stable, so extraction is
//! an ordered chain of independent strategies. Each strategy returns a
//! possibly-empty list; the first non-empty result wins. Malformed input
//! never errors, it just yields zero matches and falls through.

use std::sync::LazyLock;

use regex::Regex;

/// Hard cap on extracted references, one reading per day for a year.
pub const MAX_READINGS: usize = 365;

// Anchor tags pointing at a passage-lookup URL carry the reference in their
// `search` query parameter.
static PASSAGE_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a[^>]*href="[^"]*/passage/\?search=([^"&]+)"[^>]*>[^<]+</a>"#)
        .expect("passage link pattern is valid")
});

// Loose textual references: optional leading digit, word token, chapter,
// optional verse range, optional semicolon-joined extra ranges.
static LOOSE_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d?\s*[A-Za-z]+\s+\d+(?::\d+)?(?:-\d+(?::\d+)?)?(?:;\s*\d+(?::\d+)?(?:-\d+(?::\d+)?)?)*)\b")
        .expect("loose reference pattern is valid")
});

// Plain-text "Day N: <reference>" listing lines.
static DAY_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Day\s+\d+:\s*([^\n\r<]+)").expect("day line pattern is valid"));

/// Extracts an ordered, deduplicated list of reading references from HTML.
///
/// Strategies are tried in strict priority order; the first one producing at
/// least one reference wins. The result preserves first-seen order, drops
/// exact duplicates, and is truncated to [`MAX_READINGS`] entries. An empty
/// result is not an error here; callers decide whether that is fatal.
pub fn extract_references(html: &str) -> Vec<String> {
    let mut readings = extract_from_passage_links(html);

    if readings.is_empty() {
        readings = extract_loose_references(html);
    }

    if readings.is_empty() {
        readings = extract_day_lines(html);
    }

    readings.truncate(MAX_READINGS);
    readings
}

fn push_unique(readings: &mut Vec<String>, reference: String) {
    if !reference.is_empty() && !readings.contains(&reference) {
        readings.push(reference);
    }
}

fn extract_from_passage_links(html: &str) -> Vec<String> {
    let mut readings = Vec::new();

    for caps in PASSAGE_LINK_RE.captures_iter(html) {
        let Some(raw) = caps.get(1) else { continue };
        let decoded = urlencoding::decode(raw.as_str())
            .map(|c| c.into_owned())
            .unwrap_or_else(|_| raw.as_str().to_string());
        push_unique(&mut readings, decoded.replace('+', " "));
    }

    readings
}

fn extract_loose_references(html: &str) -> Vec<String> {
    let mut readings = Vec::new();

    for caps in LOOSE_REF_RE.captures_iter(html) {
        let Some(m) = caps.get(1) else { continue };
        let reference = m.as_str().trim();
        // Short matches are noise ("a 1", "of 12"), not references.
        if reference.len() > 3 {
            push_unique(&mut readings, reference.to_string());
        }
    }

    readings
}

fn extract_day_lines(html: &str) -> Vec<String> {
    let mut readings = Vec::new();

    for caps in DAY_LINE_RE.captures_iter(html) {
        let Some(m) = caps.get(1) else { continue };
        push_unique(&mut readings, m.as_str().trim().to_string());
    }

    readings
}
