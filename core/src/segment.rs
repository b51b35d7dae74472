//! Greedy longest-match segmentation over a variable-key-length index.
//!
//! At each position the engine probes substrings from the index's longest
//! key length down to one scalar and takes the first hit. Positions with no
//! hit become single-scalar unknown spans, so the output always covers the
//! input exactly, in order, without gaps or overlaps.
//!
//! All offsets and lengths are in Unicode scalar values. Probing slices the
//! input at precomputed char boundaries, so no substring is ever allocated.

/// An index the segmentation engine can probe.
pub trait SpanIndex {
    type Value;

    /// Value for an exact key, if present.
    fn lookup(&self, key: &str) -> Option<&Self::Value>;

    /// Longest key in the index, in scalar values.
    fn max_key_len(&self) -> usize;
}

/// One segment of the input.
#[derive(Debug, PartialEq, Eq)]
pub struct Span<'a, V> {
    /// The covered input text.
    pub text: &'a str,
    /// Offset of the first scalar.
    pub start: usize,
    /// Length in scalars; always 1 for an unknown span.
    pub len: usize,
    /// Index value for a matched span, `None` for an unknown one.
    pub value: Option<&'a V>,
}

impl<V> Span<'_, V> {
    pub fn is_match(&self) -> bool {
        self.value.is_some()
    }

    /// Offset one past the last scalar.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

// Manual impls: a derive would demand `V: Clone`/`V: Copy`.
impl<V> Clone for Span<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Span<'_, V> {}

/// Segment `input` against `index`, preferring the longest key at each
/// position.
///
/// # Example
/// ```
/// use libtangut_core::segment::{segment, SpanIndex};
/// use std::collections::HashMap;
///
/// struct Keys(HashMap<&'static str, u8>);
/// impl SpanIndex for Keys {
///     type Value = u8;
///     fn lookup(&self, key: &str) -> Option<&u8> { self.0.get(key) }
///     fn max_key_len(&self) -> usize { 2 }
/// }
///
/// let keys = Keys(HashMap::from([("a", 1), ("ab", 2)]));
/// let spans = segment("abc", &keys);
/// let texts: Vec<&str> = spans.iter().map(|s| s.text).collect();
/// assert_eq!(texts, vec!["ab", "c"]);
/// assert!(spans[0].is_match());
/// assert!(!spans[1].is_match());
/// ```
pub fn segment<'a, I>(input: &'a str, index: &'a I) -> Vec<Span<'a, I::Value>>
where
    I: SpanIndex + ?Sized,
{
    // bounds[k] is the byte offset of scalar k; bounds[n] == input.len()
    let bounds: Vec<usize> = input
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(input.len()))
        .collect();
    let n = bounds.len() - 1;
    let max_len = index.max_key_len().max(1);

    let mut spans = Vec::new();
    let mut pos = 0;
    while pos < n {
        let longest = max_len.min(n - pos);
        let hit = (1..=longest).rev().find_map(|len| {
            let key = &input[bounds[pos]..bounds[pos + len]];
            index.lookup(key).map(|value| (len, value))
        });

        let (len, value) = match hit {
            Some((len, value)) => (len, Some(value)),
            None => (1, None),
        };
        spans.push(Span {
            text: &input[bounds[pos]..bounds[pos + len]],
            start: pos,
            len,
            value,
        });
        pos += len;
    }
    spans
}
