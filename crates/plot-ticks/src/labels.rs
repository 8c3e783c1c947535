// File: crates/plot-ticks/src/labels.rs
// Summary: Tick labels and compaction of the prefix/suffix shared by every label.
// Notes:
// - Prefixes only break after a space and suffixes only start on a '.' or
//   space, so compaction never cuts a word or number in half.
// - The full label is kept in `full_text` for tooltips and hover readouts.

use crate::format::TickFormat;

/// A labeled position along an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Display text; compacted when the whole axis shares a prefix/suffix.
    pub text: String,
    /// Text as produced by the formatter.
    pub full_text: String,
}

impl Tick {
    pub fn new(value: f64, text: impl Into<String>) -> Self {
        let text = text.into();
        Self { value, full_text: text.clone(), text }
    }
}

/// Longest prefix shared by `a` and `b` that ends right after a space.
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut breakpoint = 0;
    for ((i, ca), cb) in a.char_indices().zip(b.chars()) {
        if ca != cb { break; }
        if ca == ' ' { breakpoint = i + ca.len_utf8(); }
    }
    &a[..breakpoint]
}

/// Longest suffix shared by `a` and `b` that starts on a '.' or a space.
pub fn common_suffix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut breakpoint = a.len();
    for ((i, ca), cb) in a.char_indices().rev().zip(b.chars().rev()) {
        if ca != cb { break; }
        if ca == '.' || ca == ' ' { breakpoint = i; }
    }
    &a[breakpoint..]
}

/// Strip the prefix and suffix common to every label, keeping the original
/// text in `full_text`. Lists with fewer than two labels are left as is.
pub fn compact_labels(mut ticks: Vec<Tick>) -> Vec<Tick> {
    if ticks.len() < 2 {
        for t in &mut ticks { t.full_text = t.text.clone(); }
        return ticks;
    }

    let first = ticks[0].text.as_str();
    let prefix = ticks[1..].iter().fold(first, |acc, t| common_prefix(acc, &t.text));
    let suffix = ticks[1..].iter().fold(first, |acc, t| common_suffix(acc, &t.text));
    let (prefix_len, suffix_len) = (prefix.len(), suffix.len());

    for t in &mut ticks {
        let end = t.text.len().saturating_sub(suffix_len);
        // prefix and suffix may overlap when labels repeat
        let compact = t.text.get(prefix_len..end).unwrap_or("").to_owned();
        t.full_text = std::mem::replace(&mut t.text, compact);
    }
    ticks
}

/// Format every value and compact the resulting labels.
pub fn format_ticks<F: TickFormat + ?Sized>(values: &[f64], format: &F) -> Vec<Tick> {
    let ticks = values.iter().map(|&v| Tick::new(v, format.format(v))).collect();
    compact_labels(ticks)
}
