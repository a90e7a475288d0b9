//! Data types shared by the search pipeline and the selection state machine.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Sanitized user input at the moment of dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Query(Arc<str>);

impl Query {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when there is nothing worth sending to the search endpoint.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Monotonically increasing tag attached to every dispatched query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct QuerySeq(u64);

impl QuerySeq {
    /// Sequence value that precedes every dispatched query.
    pub const NONE: QuerySeq = QuerySeq(0);

    pub fn next(self) -> Self {
        QuerySeq(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for QuerySeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single hit returned by the search endpoint.
///
/// The endpoint issues no stable identifiers, so results are identified by
/// their position in the [`ResultSet`] they arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub group_name: String,
    pub jar_name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SearchResult {
    pub fn new(
        group_name: impl Into<String>,
        jar_name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_name: group_name.into(),
            jar_name: jar_name.into(),
            version: version.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// `group` when group and artifact coincide, `group/artifact` otherwise.
    pub fn project_label(&self) -> String {
        if self.group_name == self.jar_name {
            self.group_name.clone()
        } else {
            format!("{}/{}", self.group_name, self.jar_name)
        }
    }
}

/// Ordered result list produced atomically by one fetch.
///
/// Cloning is cheap; the rows are shared and never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet(Arc<[SearchResult]>);

impl ResultSet {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self(results.into())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[SearchResult] {
        &self.0
    }

    /// Keep only the first `limit` rows.
    pub fn truncated(&self, limit: usize) -> Self {
        if limit >= self.len() {
            return self.clone();
        }
        Self(self.0[..limit].into())
    }
}

impl Deref for ResultSet {
    type Target = [SearchResult];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<SearchResult>> for ResultSet {
    fn from(results: Vec<SearchResult>) -> Self {
        Self::new(results)
    }
}

impl Serialize for ResultSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}
