//! Value representation for observed fields

mod compound;
mod display;
mod identity;
mod impls;
mod refs;

pub use compound::RecordValue;
pub use refs::{ListRef, MapRef, RecordRef, SharedRef};

use std::sync::Arc;

/// A field value as seen by the change detector.
///
/// Values are organized into two tiers:
/// - Tier 1: Primitives, compared by value
/// - Tier 2: Composite containers behind shared handles, compared by identity
#[derive(Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Tier 1: Primitives
    // ═══════════════════════════════════════════════════════════════════
    /// The unit type `()`, standing in for "no value"
    Unit,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// Unicode scalar value
    Char(char),

    /// 64-bit signed integer
    I64(i64),

    /// 64-bit unsigned integer
    U64(u64),

    /// 64-bit floating point
    F64(f64),

    /// Immutable string. The Arc is only a sharing optimization: strings
    /// compare by content.
    String(Arc<String>),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 2: Composite Containers
    // ═══════════════════════════════════════════════════════════════════
    /// Growable sequence of values
    List(ListRef),

    /// String-keyed mapping
    Map(MapRef),

    /// Named record
    Record(RecordRef),
}
