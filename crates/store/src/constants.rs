//! Constants used throughout the DeckDrop store crate.
//!
//! This module contains all path and filename constants to ensure
//! consistency across the codebase and make maintenance easier.

/// Directory name for submitter-provided source files within a partition.
pub const INBOUND_DIR_NAME: &str = "inbound";

/// Directory name for operator-provided result files within a partition.
pub const OUTBOUND_DIR_NAME: &str = "outbound";

/// Filename of the per-partition last-activity stamp.
pub const ACTIVITY_STAMP_NAME: &str = ".activity";

/// Hours a partition survives without activity before the sweep removes it.
pub const RETENTION_HOURS: i64 = 24;

/// Default directory for exchange data when no explicit root is configured.
pub const DEFAULT_DATA_DIR: &str = "exchange_data";
