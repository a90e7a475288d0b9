//! Query clean-up for text pasted from build manifests.
//!
//! People frequently paste a whole dependency coordinate such as
//! `[ring/ring-core "1.9.0"]` (Leiningen/Boot) or `{metosin/reitit {:mvn/version "0.7.0"}}`
//! (deps.edn). The brackets, braces and quotes carry no search meaning and
//! are stripped; everything else is passed through untouched and in order.

use super::types::Query;

/// Characters removed from raw input before it becomes a query.
pub const STRUCTURAL_CHARS: [char; 5] = ['[', ']', '{', '}', '"'];

/// Strip structural/quoting characters from raw input. Total over all strings.
pub fn sanitize(raw: &str) -> Query {
    Query::new(raw.replace(STRUCTURAL_CHARS, ""))
}
