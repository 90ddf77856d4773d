//! [`Descriptor`] — the representation-independent `{kind, bytes, length}`
//! triple.

use crate::{ViewError, ViewKind};

/// Raw bytes of a view plus what is needed to rebuild it.
///
/// A descriptor owns its bytes and never references the region the original
/// view was a window into. `bytes().len() == length() * kind().element_size()`
/// holds for every descriptor: [`Descriptor::new`] and deserialization both
/// reject triples that break it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawDescriptor")
)]
pub struct Descriptor {
    kind: ViewKind,
    bytes: Vec<u8>,
    length: usize,
}

impl Descriptor {
    /// `length` counts elements of `kind`, not bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use buffer_view::{Descriptor, ViewKind};
    ///
    /// assert!(Descriptor::new(ViewKind::Int16, vec![0; 4], 2).is_ok());
    /// assert!(Descriptor::new(ViewKind::Int16, vec![0; 4], 4).is_err());
    /// ```
    pub fn new(kind: ViewKind, bytes: Vec<u8>, length: usize) -> Result<Self, ViewError> {
        if kind.byte_length_of(length) != Some(bytes.len()) {
            return Err(ViewError::MalformedDescriptor {
                kind,
                length,
                byte_length: bytes.len(),
            });
        }
        Ok(Self {
            kind,
            bytes,
            length,
        })
    }

    /// Kind of the view the bytes came from.
    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    /// Raw bytes of the view.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Logical element count.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Length of `bytes()`.
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Splits into `(kind, bytes, length)`.
    pub fn into_parts(self) -> (ViewKind, Vec<u8>, usize) {
        (self.kind, self.bytes, self.length)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDescriptor {
    kind: ViewKind,
    bytes: Vec<u8>,
    length: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDescriptor> for Descriptor {
    type Error = ViewError;

    fn try_from(raw: RawDescriptor) -> Result<Self, Self::Error> {
        Descriptor::new(raw.kind, raw.bytes, raw.length)
    }
}
