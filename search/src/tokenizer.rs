//! Fixed-width n-gram tokenizer.
//!
//! Text is windowed by Unicode code point, never by byte, so multi-byte
//! scripts produce whole characters: `"田中太郎"` yields `田中`, `中太`, `太郎`.
//! A text shorter than the window yields nothing; no narrower gram is
//! substituted.

use crate::error::SearchError;
use std::str::CharIndices;

/// Window width used by the indexer and the query builder.
pub const BIGRAM: usize = 2;

/// Separates a namespace prefix from its gram.
pub const PREFIX_SEPARATOR: char = ' ';

/// Iterator over the n-grams of a string, borrowing from it.
#[derive(Debug, Clone)]
pub struct NGrams<'a> {
    text: &'a str,
    starts: CharIndices<'a>,
    /// Runs `window - 1` code points ahead of `starts`.
    ends: CharIndices<'a>,
}

impl<'a> NGrams<'a> {
    /// Returns `InvalidArgument` for a zero window.
    pub fn new(text: &'a str, window: usize) -> Result<Self, SearchError> {
        if window == 0 {
            return Err(SearchError::InvalidArgument(
                "n-gram window size must be positive".to_string(),
            ));
        }
        Ok(Self::with_window(text, window))
    }

    pub fn bigrams(text: &'a str) -> Self {
        Self::with_window(text, BIGRAM)
    }

    fn with_window(text: &'a str, window: usize) -> Self {
        let mut ends = text.char_indices();
        for _ in 1..window {
            if ends.next().is_none() {
                break;
            }
        }

        Self {
            text,
            starts: text.char_indices(),
            ends,
        }
    }
}

impl<'a> Iterator for NGrams<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let (last, c) = self.ends.next()?;
        let (start, _) = self.starts.next()?;
        Some(&self.text[start..last + c.len_utf8()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Byte length bounds the remaining code points from above.
        (0, Some(self.text.len()))
    }
}

/// Formats a namespaced token, `"<prefix> <gram>"`.
pub fn prefixed(prefix: &str, gram: &str) -> String {
    let mut token = String::with_capacity(prefix.len() + 1 + gram.len());
    token.push_str(prefix);
    token.push(PREFIX_SEPARATOR);
    token.push_str(gram);
    token
}

/// Expands grams into tokens: one per prefix in the given order, or the bare
/// gram once when `prefixes` is empty.
pub(crate) fn expand<'a>(
    grams: NGrams<'a>,
    prefixes: &'a [&'a str],
) -> impl Iterator<Item = String> + 'a {
    grams.flat_map(move |gram| {
        let bare = prefixes.is_empty().then(|| gram.to_string());
        let tagged = prefixes.iter().map(move |prefix| prefixed(prefix, gram));
        bare.into_iter().chain(tagged)
    })
}

/// Splits `text` into `window`-wide grams and tags each with every prefix.
///
/// Output follows gram order left to right; at one position tokens follow the
/// order of `prefixes`.
pub fn tokenize(text: &str, window: usize, prefixes: &[&str]) -> Result<Vec<String>, SearchError> {
    let grams = NGrams::new(text, window)?;
    Ok(expand(grams, prefixes).collect())
}
