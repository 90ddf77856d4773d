//! Rebuilding views from descriptors.

use crate::{ArrayBuffer, Buffer, Descriptor, TypedArray, Value, ViewKind};

/// Rebuilds a value of the descriptor's kind.
///
/// The descriptor's byte vector becomes the new value's storage without a
/// copy: whole-buffer kinds wrap it directly and numeric kinds get a view at
/// offset 0 over a region that owns it. Classifying the result yields
/// `descriptor.kind()`.
///
/// # Example
///
/// ```
/// use buffer_view::{classify, from_descriptor, Descriptor, ViewKind};
///
/// let descriptor = Descriptor::new(ViewKind::Uint16, vec![1, 0, 2, 0], 2).unwrap();
/// let value = from_descriptor(descriptor);
/// assert_eq!(classify(&value), Ok(ViewKind::Uint16));
/// ```
pub fn from_descriptor(descriptor: Descriptor) -> Value {
    let (kind, bytes, length) = descriptor.into_parts();
    match (kind, kind.element_type()) {
        (ViewKind::Buffer, _) => Value::Buffer(Buffer::from_vec(bytes)),
        (_, Some(element_type)) => Value::TypedArray(TypedArray::over_region(
            element_type,
            ArrayBuffer::from_vec(bytes),
            0,
            length,
        )),
        (_, None) => Value::ArrayBuffer(ArrayBuffer::from_vec(bytes)),
    }
}

impl From<Descriptor> for Value {
    fn from(descriptor: Descriptor) -> Self {
        from_descriptor(descriptor)
    }
}
