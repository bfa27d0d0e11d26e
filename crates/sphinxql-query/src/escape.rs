//! Phrase escaping for the full-text query mini-language.
//!
//! Two strictly sequential passes over the raw phrase:
//!
//! 1. Double every percent sign, so the phrase can never collide with the
//!    host driver's `%s`-style placeholder syntax.
//! 2. Prefix each reserved query-language character (`@`, `(`, `)`) with a
//!    doubled backslash. The server's own parser consumes one backslash;
//!    the second survives the string-literal layer above it.
//!
//! The order is load-bearing: pass 2 introduces no percent signs, and the
//! backslashes it emits must not be re-processed by pass 1. Phrases with
//! nothing to escape pass through untouched.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters with structural meaning inside the server's query language
static RESERVED: Lazy<Regex> = Lazy::new(|| Regex::new(r"([@()])").unwrap());

/// Escape a raw search phrase for embedding in generated query text.
pub fn escape_phrase(raw: &str) -> String {
    let phrase = if raw.contains('%') {
        raw.replace('%', "%%")
    } else {
        raw.to_owned()
    };
    if RESERVED.is_match(&phrase) {
        RESERVED.replace_all(&phrase, r"\\$1").into_owned()
    } else {
        phrase
    }
}
