//! Views over shared regions: the byte-view capability, whole byte buffers
//! and untyped data views.

use crate::array_buffer::checked_end;
use crate::{ArrayBuffer, ElementType, TypedArray, ViewError};

/// Capability of a value that addresses a window of an [`ArrayBuffer`].
///
/// Implementors guarantee that `[byte_offset, byte_offset + byte_length)`
/// lies inside `buffer()`.
pub trait ArrayBufferView {
    /// The backing region, which may be larger than the view.
    fn buffer(&self) -> &ArrayBuffer;

    /// Start of the view inside `buffer()`.
    fn byte_offset(&self) -> usize;

    /// Number of bytes the view addresses.
    fn byte_length(&self) -> usize;

    /// Copies exactly the bytes this view addresses. The result does not
    /// reference the backing region.
    fn to_vec(&self) -> Vec<u8> {
        self.buffer()
            .copy_window(self.byte_offset(), self.byte_length())
    }
}

/// A whole byte buffer.
///
/// A `Buffer` always spans its entire backing region from offset 0, so its
/// contents are the region's contents. Clones share the region.
///
/// # Example
///
/// ```
/// use buffer_view::{ArrayBufferView, Buffer};
///
/// let buf = Buffer::from_slice(b"abc");
/// assert_eq!(buf.len(), 3);
/// assert_eq!(buf.to_vec(), b"abc".to_vec());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    buffer: ArrayBuffer,
}

impl Buffer {
    /// Takes ownership of `bytes` without copying.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            buffer: ArrayBuffer::from_vec(bytes),
        }
    }

    /// Copies `bytes` into a new buffer.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::from_vec(bytes.to_vec())
    }

    /// Allocates a zero-filled buffer.
    pub fn alloc(len: usize) -> Self {
        Self {
            buffer: ArrayBuffer::new(len),
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.buffer.byte_length()
    }

    /// Whether the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// An unsigned 8-bit array view over the same region.
    pub fn as_uint8_array(&self) -> TypedArray {
        TypedArray::over_region(ElementType::Uint8, self.buffer.clone(), 0, self.len())
    }
}

impl ArrayBufferView for Buffer {
    fn buffer(&self) -> &ArrayBuffer {
        &self.buffer
    }

    fn byte_offset(&self) -> usize {
        0
    }

    fn byte_length(&self) -> usize {
        self.len()
    }
}

/// An untyped window into a region.
///
/// Data views satisfy [`ArrayBufferView`] but are not one of the classified
/// view kinds.
#[derive(Debug, Clone)]
pub struct DataView {
    buffer: ArrayBuffer,
    byte_offset: usize,
    byte_length: usize,
}

impl DataView {
    /// Creates a view of `byte_length` bytes starting at `byte_offset`.
    pub fn new(
        buffer: ArrayBuffer,
        byte_offset: usize,
        byte_length: usize,
    ) -> Result<Self, ViewError> {
        checked_end(byte_offset, byte_length, buffer.byte_length())?;
        Ok(Self {
            buffer,
            byte_offset,
            byte_length,
        })
    }
}

impl ArrayBufferView for DataView {
    fn buffer(&self) -> &ArrayBuffer {
        &self.buffer
    }

    fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    fn byte_length(&self) -> usize {
        self.byte_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_spans_whole_region() {
        let buf = Buffer::from_vec(vec![1, 2, 3, 4]);
        assert_eq!(buf.byte_offset(), 0);
        assert_eq!(buf.byte_length(), 4);
        assert_eq!(buf.buffer().byte_length(), 4);
        assert!(!buf.is_empty());
        assert!(Buffer::alloc(0).is_empty());
    }

    #[test]
    fn buffer_uint8_array_aliases() {
        let buf = Buffer::from_slice(&[10, 20, 30]);
        let arr = buf.as_uint8_array();
        assert!(arr.set(1, 99.0));
        assert_eq!(buf.to_vec(), vec![10, 99, 30]);
    }

    #[test]
    fn data_view_bounds() {
        let region = ArrayBuffer::from_vec((0..10).collect());
        let dv = DataView::new(region.clone(), 2, 3).unwrap();
        assert_eq!(dv.to_vec(), vec![2, 3, 4]);
        assert_eq!(
            DataView::new(region, 8, 3).unwrap_err(),
            ViewError::OutOfBounds {
                byte_offset: 8,
                byte_length: 3,
                buffer_length: 10,
            }
        );
    }
}
