//! Record identifiers.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The ID of a budget or expense.
///
/// IDs are opaque strings. Generated IDs combine the creation time in
/// milliseconds with 64 random bits, so two records created in the same
/// millisecond will still get different IDs with overwhelming probability.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap an existing ID, e.g. one taken from a URL or a form.
    pub fn new(id: &str) -> Self {
        Self(id.to_owned())
    }

    /// Generate a fresh ID for a new record.
    pub fn generate() -> Self {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let random_bits: u64 = rand::random();

        Self(format!("{millis:x}-{random_bits:016x}"))
    }

    /// Whether the ID is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
