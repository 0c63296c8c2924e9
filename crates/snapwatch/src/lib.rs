//! # Snapwatch
//!
//! Shallow dirty-checking change detection.
//!
//! A [`SnapshotComparator`] remembers an object's top-level fields and, on
//! each pass, reports which of them changed. Primitives are compared by
//! value; lists, maps and records are compared by identity only. Mutating a
//! list in place therefore goes unnoticed until the field is reassigned to a
//! new container.
//!
//! ## Architecture
//!
//! - **Values**: inline primitives plus shared container handles
//! - **Observable**: explicit field schemas, no reflection
//! - **Comparator**: one snapshot, replaced on every pass
//! - **Watcher**: per-binding notification on top of the comparator

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod comparator;
pub mod context;
pub mod dirty;
pub mod error;
pub mod object;
pub mod schema;
pub mod snapshot;
pub mod value;
pub mod watcher;

// Re-export main types
pub use comparator::SnapshotComparator;
pub use context::{DetectContext, NanPolicy};
pub use dirty::{DirtySet, FieldChange};
pub use error::{DetectError, Result};
pub use object::{Observable, ObservedObject};
pub use schema::{FieldName, Schema};
pub use snapshot::Snapshot;
pub use value::{ListRef, MapRef, RecordRef, RecordValue, SharedRef, Value};
pub use watcher::{BindingId, ChangeListener, Watcher};

/// Snapwatch version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
