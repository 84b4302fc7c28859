//! File record data model.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One uploaded file pointer, as stored on the append-only ledger.
///
/// Created exactly once, immediately after a successful object-store upload,
/// and never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Content-addressed identifier of the stored bytes.
    pub content_id: String,

    /// Original file name as supplied by the user.
    pub name: String,

    /// File type tag derived from the name.
    pub file_type: String,

    /// Creation timestamp (unix seconds).
    pub uploaded_at: u64,
}

impl FileRecord {
    /// Create a record for a freshly uploaded file.
    ///
    /// The type tag is derived from `name` via [`file_type_of`] and the
    /// timestamp is the current unix time.
    pub fn new(content_id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let file_type = file_type_of(&name).to_string();
        Self {
            content_id: content_id.into(),
            name,
            file_type,
            uploaded_at: unix_now(),
        }
    }

    /// Create a record with an explicit timestamp (for testing/reconstruction).
    pub fn new_at_time(
        content_id: impl Into<String>,
        name: impl Into<String>,
        uploaded_at: u64,
    ) -> Self {
        let name = name.into();
        let file_type = file_type_of(&name).to_string();
        Self {
            content_id: content_id.into(),
            name,
            file_type,
            uploaded_at,
        }
    }
}

/// Derive the type tag of a file name: the substring after the last `.`.
///
/// A name with no dot yields the whole name. `"archive.tar.gz"` yields
/// `"gz"`, `"README"` yields `"README"`.
pub fn file_type_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) => &name[i + 1..],
        None => name,
    }
}

/// Current unix time in seconds.
pub fn unix_now() -> u64 {
    Utc::now().timestamp().max(0) as u64
}
