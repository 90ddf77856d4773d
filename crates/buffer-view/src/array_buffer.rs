//! Shared, fixed-size untyped memory regions.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::ViewError;

/// A fixed-size byte region shared between handles and the views built on it.
///
/// Cloning an `ArrayBuffer` clones the handle, not the bytes: every clone and
/// every view created from it observes writes made through any of them. The
/// region never changes size after creation.
///
/// # Example
///
/// ```
/// use buffer_view::ArrayBuffer;
///
/// let region = ArrayBuffer::new(4);
/// let alias = region.clone();
/// alias.write(1, &[7, 8]).unwrap();
/// assert_eq!(region.to_vec(), vec![0, 7, 8, 0]);
/// ```
#[derive(Clone, Default)]
pub struct ArrayBuffer {
    region: Arc<RwLock<Vec<u8>>>,
}

impl ArrayBuffer {
    /// Allocates a zero-filled region of `byte_length` bytes.
    pub fn new(byte_length: usize) -> Self {
        Self::from_vec(vec![0; byte_length])
    }

    /// Takes ownership of `bytes` as the region's storage without copying.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            region: Arc::new(RwLock::new(bytes)),
        }
    }

    /// Size of the region in bytes.
    pub fn byte_length(&self) -> usize {
        self.region.read().len()
    }

    /// Copies the whole region.
    pub fn to_vec(&self) -> Vec<u8> {
        self.region.read().clone()
    }

    /// Copies `[begin, end)` into a new, independent region. Bounds are
    /// clamped to the region, and `end < begin` yields an empty region.
    pub fn slice(&self, begin: usize, end: usize) -> ArrayBuffer {
        let bytes = self.region.read();
        let end = end.min(bytes.len());
        let begin = begin.min(end);
        ArrayBuffer::from_vec(bytes[begin..end].to_vec())
    }

    /// Overwrites bytes starting at `byte_offset`.
    pub fn write(&self, byte_offset: usize, data: &[u8]) -> Result<(), ViewError> {
        let mut bytes = self.region.write();
        let end = checked_end(byte_offset, data.len(), bytes.len())?;
        bytes[byte_offset..end].copy_from_slice(data);
        Ok(())
    }

    /// Sets every byte of the region to `value`.
    pub fn fill(&self, value: u8) {
        self.region.write().fill(value);
    }

    /// Whether both handles refer to the same allocation.
    pub fn same_region(&self, other: &ArrayBuffer) -> bool {
        Arc::ptr_eq(&self.region, &other.region)
    }

    /// Copies `[byte_offset, byte_offset + byte_length)`.
    ///
    /// Callers pass windows that were bounds-checked against this region when
    /// the view was built; regions never resize, so the window stays valid.
    pub(crate) fn copy_window(&self, byte_offset: usize, byte_length: usize) -> Vec<u8> {
        self.region.read()[byte_offset..byte_offset + byte_length].to_vec()
    }

    pub(crate) fn with_window<R>(
        &self,
        byte_offset: usize,
        byte_length: usize,
        f: impl FnOnce(&[u8]) -> R,
    ) -> R {
        f(&self.region.read()[byte_offset..byte_offset + byte_length])
    }

    pub(crate) fn with_window_mut<R>(
        &self,
        byte_offset: usize,
        byte_length: usize,
        f: impl FnOnce(&mut [u8]) -> R,
    ) -> R {
        f(&mut self.region.write()[byte_offset..byte_offset + byte_length])
    }
}

impl fmt::Debug for ArrayBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayBuffer")
            .field("byte_length", &self.byte_length())
            .finish()
    }
}

/// Returns `byte_offset + byte_length` if that window fits in `buffer_length`
/// bytes.
pub(crate) fn checked_end(
    byte_offset: usize,
    byte_length: usize,
    buffer_length: usize,
) -> Result<usize, ViewError> {
    byte_offset
        .checked_add(byte_length)
        .filter(|end| *end <= buffer_length)
        .ok_or(ViewError::OutOfBounds {
            byte_offset,
            byte_length,
            buffer_length,
        })
}
