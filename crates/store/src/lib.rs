//! DeckDrop partition store
//!
//! This crate provides the storage layer for the DeckDrop file exchange:
//! an access-code-keyed namespace of partitions on the local filesystem,
//! plus the retention sweep and the operator bulk wipe.
//!
//! ## Storage Layout
//!
//! ```text
//! <root>/
//! └── <sanitized-code>/      # one partition per access code
//!     ├── .activity          # last-activity stamp (RFC 3339 UTC)
//!     ├── inbound/           # submitter-provided source files
//!     │   └── slides.pdf
//!     └── outbound/          # operator-provided result files
//!         └── result.pptx
//! ```
//!
//! ## Design Principles
//!
//! - Partitions are keyed only by the sanitized access code; two raw codes
//!   that filter to the same string share one partition.
//! - Partitions and sub-areas are created lazily on first access, read or
//!   write; creation is idempotent.
//! - Every operation that touches a partition refreshes its `.activity`
//!   stamp, which the retention sweep reads in preference to directory
//!   mtime.
//! - Writes are whole-buffer and synchronous; a second write of the same
//!   filename is stored under a timestamp-prefixed name rather than
//!   overwriting.
//! - There is no locking and no transaction; every operation is a direct
//!   blocking filesystem call.
//!
//! ## Example Usage
//!
//! ```no_run
//! use deckdrop_store::{Area, ExchangeStore};
//! use deckdrop_types::AccessCode;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ExchangeStore::new(Path::new("exchange_data"))?;
//! let code = AccessCode::new("Alex8899")?;
//! store.save_file(&code, Area::Inbound, "slides.pdf", b"%PDF-1.7")?;
//! let files = store.list_files(&code, Area::Inbound)?;
//! assert_eq!(files.len(), 1);
//! # Ok(())
//! # }
//! ```

mod constants;
mod store;

pub use constants::{
    ACTIVITY_STAMP_NAME, DEFAULT_DATA_DIR, INBOUND_DIR_NAME, OUTBOUND_DIR_NAME, RETENTION_HOURS,
};
pub use store::{Area, ExchangeStore, StoredFile};

/// Errors that can occur during store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Storage root could not be created or resolved
    #[error("Invalid storage root: {0}")]
    InvalidRoot(String),

    /// Filename is empty, hidden, or contains path components
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    /// Requested file does not exist in the partition
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
