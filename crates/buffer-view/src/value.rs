//! [`Value`] — an opaque value that may or may not be a binary view.

use crate::{ArrayBuffer, ArrayBufferView, Buffer, DataView, TypedArray};

/// A dynamically typed value as handed over by a serialization layer.
///
/// Only the binary variants can be classified; the scalar variants exist so
/// callers can pass arbitrary values through [`classify`](crate::classify)
/// and [`is_supported_view`](crate::is_supported_view).
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    /// A whole byte buffer.
    Buffer(Buffer),
    /// An untyped region.
    ArrayBuffer(ArrayBuffer),
    /// A numeric array view.
    TypedArray(TypedArray),
    /// An untyped window; supported as a view but never classified.
    DataView(DataView),
}

impl Value {
    /// Variant name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Buffer(_) => "Buffer",
            Value::ArrayBuffer(_) => "ArrayBuffer",
            Value::TypedArray(view) => view.kind().name(),
            Value::DataView(_) => "DataView",
        }
    }

    /// The byte-view capability, if the value has it. A bare region is not
    /// itself a view.
    pub fn as_view(&self) -> Option<&dyn ArrayBufferView> {
        match self {
            Value::Buffer(buf) => Some(buf),
            Value::TypedArray(view) => Some(view),
            Value::DataView(view) => Some(view),
            _ => None,
        }
    }
}

impl From<Buffer> for Value {
    fn from(value: Buffer) -> Self {
        Value::Buffer(value)
    }
}

impl From<ArrayBuffer> for Value {
    fn from(value: ArrayBuffer) -> Self {
        Value::ArrayBuffer(value)
    }
}

impl From<TypedArray> for Value {
    fn from(value: TypedArray) -> Self {
        Value::TypedArray(value)
    }
}

impl From<DataView> for Value {
    fn from(value: DataView) -> Self {
        Value::DataView(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}
