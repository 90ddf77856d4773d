//! Numeric array views.

use crate::array_buffer::checked_end;
use crate::{ArrayBuffer, ArrayBufferView, ElementType, ViewError, ViewKind};

/// A fixed-width numeric view over a window of an [`ArrayBuffer`].
///
/// Elements are stored in native byte order. Writes go straight to the shared
/// region, so `set` takes `&self`.
///
/// # Example
///
/// ```
/// use buffer_view::{ArrayBuffer, ArrayBufferView, ElementType, TypedArray};
///
/// let region = ArrayBuffer::new(16);
/// let view = TypedArray::new(ElementType::Uint16, region.clone(), 4, 2).unwrap();
/// view.set(0, 0x0102 as f64);
/// assert_eq!(view.byte_length(), 4);
/// assert_eq!(view.get(0), Some(258.0));
/// ```
#[derive(Debug, Clone)]
pub struct TypedArray {
    element_type: ElementType,
    buffer: ArrayBuffer,
    byte_offset: usize,
    length: usize,
}

impl TypedArray {
    /// Creates a view of `length` elements starting at `byte_offset`.
    ///
    /// The offset must be a multiple of the element size and the window must
    /// fit inside `buffer`.
    pub fn new(
        element_type: ElementType,
        buffer: ArrayBuffer,
        byte_offset: usize,
        length: usize,
    ) -> Result<Self, ViewError> {
        let size = element_type.size();
        if byte_offset % size != 0 {
            return Err(ViewError::Misaligned {
                element_type,
                byte_offset,
            });
        }
        let byte_length = length.checked_mul(size).ok_or(ViewError::LengthOverflow {
            element_type,
            length,
        })?;
        checked_end(byte_offset, byte_length, buffer.byte_length())?;
        Ok(Self::over_region(element_type, buffer, byte_offset, length))
    }

    /// Allocates a zero-filled view of `length` elements over a new region.
    pub fn with_length(element_type: ElementType, length: usize) -> Result<Self, ViewError> {
        let byte_length = ViewKind::from(element_type)
            .byte_length_of(length)
            .ok_or(ViewError::LengthOverflow {
                element_type,
                length,
            })?;
        Ok(Self::over_region(
            element_type,
            ArrayBuffer::new(byte_length),
            0,
            length,
        ))
    }

    /// Allocates a view holding `values` converted to `element_type`.
    pub fn from_f64s(element_type: ElementType, values: &[f64]) -> Self {
        // An element is never wider than an f64, so this cannot overflow.
        let byte_length = values.len() * element_type.size();
        let view = Self::over_region(element_type, ArrayBuffer::new(byte_length), 0, values.len());
        for (index, value) in values.iter().enumerate() {
            view.set(index, *value);
        }
        view
    }

    /// Builds a view over an already validated window.
    pub(crate) fn over_region(
        element_type: ElementType,
        buffer: ArrayBuffer,
        byte_offset: usize,
        length: usize,
    ) -> Self {
        Self {
            element_type,
            buffer,
            byte_offset,
            length,
        }
    }

    /// Numeric element stored in this view.
    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// View kind this array classifies as.
    pub fn kind(&self) -> ViewKind {
        self.element_type.into()
    }

    /// Number of elements, not bytes.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Reads the element at `index`, `None` when out of range.
    pub fn get(&self, index: usize) -> Option<f64> {
        let size = self.element_type.size();
        (index < self.length).then(|| {
            self.buffer
                .with_window(self.byte_offset + index * size, size, |bytes| {
                    self.element_type.decode(bytes)
                })
        })
    }

    /// Converts and stores `value` at `index`. Returns `false` when the index
    /// is out of range.
    pub fn set(&self, index: usize, value: f64) -> bool {
        if index >= self.length {
            return false;
        }
        let size = self.element_type.size();
        self.buffer
            .with_window_mut(self.byte_offset + index * size, size, |bytes| {
                self.element_type.encode(value, bytes)
            });
        true
    }

    /// Reads every element.
    pub fn to_f64s(&self) -> Vec<f64> {
        let element_type = self.element_type;
        self.buffer
            .with_window(self.byte_offset, self.byte_length(), |bytes| {
                bytes
                    .chunks_exact(element_type.size())
                    .map(|chunk| element_type.decode(chunk))
                    .collect()
            })
    }

    /// A view of elements `[begin, end)` over the same region. Bounds are
    /// clamped to the view.
    pub fn subarray(&self, begin: usize, end: usize) -> TypedArray {
        let end = end.min(self.length);
        let begin = begin.min(end);
        Self::over_region(
            self.element_type,
            self.buffer.clone(),
            self.byte_offset + begin * self.element_type.size(),
            end - begin,
        )
    }
}

impl ArrayBufferView for TypedArray {
    fn buffer(&self) -> &ArrayBuffer {
        &self.buffer
    }

    fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    fn byte_length(&self) -> usize {
        self.length * self.element_type.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_misaligned_offset() {
        let region = ArrayBuffer::new(16);
        assert_eq!(
            TypedArray::new(ElementType::Int32, region.clone(), 2, 1).unwrap_err(),
            ViewError::Misaligned {
                element_type: ElementType::Int32,
                byte_offset: 2,
            }
        );
        assert_eq!(
            TypedArray::new(ElementType::Int32, region.clone(), 2, 1)
                .unwrap_err()
                .to_string(),
            "byte offset 2 is not a multiple of the Int32Array element size"
        );
        assert!(TypedArray::new(ElementType::Uint8, region, 3, 1).is_ok());
    }

    #[test]
    fn rejects_window_past_end() {
        let region = ArrayBuffer::new(16);
        assert_eq!(
            TypedArray::new(ElementType::Float64, region.clone(), 8, 2).unwrap_err(),
            ViewError::OutOfBounds {
                byte_offset: 8,
                byte_length: 16,
                buffer_length: 16,
            }
        );
        assert!(TypedArray::new(ElementType::Float64, region.clone(), 8, 1).is_ok());
        assert_eq!(
            TypedArray::new(ElementType::Float64, region, 0, usize::MAX).unwrap_err(),
            ViewError::LengthOverflow {
                element_type: ElementType::Float64,
                length: usize::MAX,
            }
        );
    }

    #[test]
    fn integer_elements_wrap() {
        let view = TypedArray::from_f64s(ElementType::Int8, &[127.0, 128.0, -129.0, 3.9]);
        assert_eq!(view.to_f64s(), vec![127.0, -128.0, 127.0, 3.0]);

        let view = TypedArray::from_f64s(ElementType::Uint16, &[-1.0, 65536.0, 70000.0]);
        assert_eq!(view.to_f64s(), vec![65535.0, 0.0, 4464.0]);

        let view = TypedArray::from_f64s(ElementType::Int32, &[2147483648.0, -1.0, f64::NAN]);
        assert_eq!(view.to_f64s(), vec![-2147483648.0, -1.0, 0.0]);

        let view = TypedArray::from_f64s(ElementType::Uint32, &[-1.0]);
        assert_eq!(view.get(0), Some(4294967295.0));
    }

    #[test]
    fn clamped_elements_saturate() {
        let view = TypedArray::from_f64s(
            ElementType::Uint8Clamped,
            &[-5.0, 300.0, 1.5, 2.5, 254.5, f64::NAN],
        );
        assert_eq!(view.to_f64s(), vec![0.0, 255.0, 2.0, 2.0, 254.0, 0.0]);
    }

    #[test]
    fn float_elements() {
        let view = TypedArray::from_f64s(ElementType::Float32, &[0.1, 1.5]);
        assert_eq!(view.get(0), Some(0.1f32 as f64));
        assert_eq!(view.get(1), Some(1.5));

        let view = TypedArray::from_f64s(ElementType::Float64, &[0.1, -0.0]);
        assert_eq!(view.get(0), Some(0.1));
        assert!(view.get(1).unwrap().is_sign_negative());
    }

    #[test]
    fn with_length_rejects_overflow() {
        let err = TypedArray::with_length(ElementType::Float64, usize::MAX).unwrap_err();
        assert_eq!(
            err,
            ViewError::LengthOverflow {
                element_type: ElementType::Float64,
                length: usize::MAX,
            }
        );
        assert_eq!(
            err.to_string(),
            format!("{} elements of Float64Array overflow the addressable byte length", usize::MAX)
        );
        assert_eq!(TypedArray::with_length(ElementType::Int32, 0).unwrap().len(), 0);
    }

    #[test]
    fn get_and_set_out_of_range() {
        let view = TypedArray::with_length(ElementType::Int16, 2).unwrap();
        assert_eq!(view.get(2), None);
        assert!(!view.set(2, 1.0));
        assert_eq!(view.to_f64s(), vec![0.0, 0.0]);
    }

    #[test]
    fn subarray_shares_region() {
        let view = TypedArray::from_f64s(ElementType::Uint16, &[1.0, 2.0, 3.0, 4.0]);
        let sub = view.subarray(1, 3);
        assert_eq!(sub.byte_offset(), 2);
        assert_eq!(sub.to_f64s(), vec![2.0, 3.0]);
        sub.set(0, 20.0);
        assert_eq!(view.get(1), Some(20.0));
        assert!(sub.buffer().same_region(view.buffer()));
        assert!(view.subarray(3, 1).is_empty());
    }

    #[test]
    fn elements_use_native_byte_order() {
        let region = ArrayBuffer::from_vec(0x0102_0304u32.to_ne_bytes().to_vec());
        let view = TypedArray::new(ElementType::Uint32, region, 0, 1).unwrap();
        assert_eq!(view.get(0), Some(0x0102_0304 as f64));
    }
}
