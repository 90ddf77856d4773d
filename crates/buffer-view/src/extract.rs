//! Extraction of descriptors from live views.

use crate::{classify, ArrayBufferView, Descriptor, Value, ViewError};

/// Classifies `value` and copies out the bytes it addresses.
///
/// Typed views may be windows into a larger region; only their own window is
/// copied. The returned descriptor holds no reference to `value`'s memory, so
/// later writes to the region do not affect it.
///
/// # Example
///
/// ```
/// use buffer_view::{to_descriptor, ElementType, TypedArray, Value, ViewKind};
///
/// let view = TypedArray::from_f64s(ElementType::Float32, &[1.0, 2.0, 3.0]);
/// let descriptor = to_descriptor(&Value::from(view)).unwrap();
/// assert_eq!(descriptor.kind(), ViewKind::Float32);
/// assert_eq!(descriptor.length(), 3);
/// assert_eq!(descriptor.bytes().len(), 12);
/// ```
pub fn to_descriptor(value: &Value) -> Result<Descriptor, ViewError> {
    let kind = classify(value)?;
    let (bytes, length) = match value {
        Value::Buffer(buf) => {
            let bytes = buf.to_vec();
            let length = bytes.len();
            (bytes, length)
        }
        Value::ArrayBuffer(region) => {
            let bytes = region.to_vec();
            let length = bytes.len();
            (bytes, length)
        }
        Value::TypedArray(view) => (view.to_vec(), view.len()),
        _ => {
            return Err(ViewError::UnsupportedView {
                found: value.type_name(),
            })
        }
    };
    Descriptor::new(kind, bytes, length)
}

/// Logical length of a classified value: bytes for the whole-buffer kinds,
/// elements for numeric views.
pub fn logical_length(value: &Value) -> Option<usize> {
    match value {
        Value::Buffer(buf) => Some(buf.len()),
        Value::ArrayBuffer(region) => Some(region.byte_length()),
        Value::TypedArray(view) => Some(view.len()),
        _ => None,
    }
}

impl TryFrom<&Value> for Descriptor {
    type Error = ViewError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        to_descriptor(value)
    }
}
