//! Shallow identity: the equality the change detector runs on

use crate::context::NanPolicy;

use super::Value;

impl Value {
    /// Shallow identity with the default NaN policy.
    ///
    /// Primitives are identical when their values are equal. Composites are
    /// identical only when both sides are handles to the same container;
    /// their contents are never looked at. Values of different variants are
    /// never identical.
    pub fn identical(&self, other: &Value) -> bool {
        self.identical_under(other, NanPolicy::default())
    }

    /// Shallow identity with an explicit NaN policy.
    pub fn identical_under(&self, other: &Value, nan: NanPolicy) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::U64(a), Value::U64(b)) => a == b,
            (Value::F64(a), Value::F64(b)) => {
                a == b || (nan == NanPolicy::Identical && a.is_nan() && b.is_nan())
            }
            (Value::String(a), Value::String(b)) => a == b,

            (Value::List(a), Value::List(b)) => a.ptr_eq(b),
            (Value::Map(a), Value::Map(b)) => a.ptr_eq(b),
            (Value::Record(a), Value::Record(b)) => a.ptr_eq(b),

            _ => false,
        }
    }
}
