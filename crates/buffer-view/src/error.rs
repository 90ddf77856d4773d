use thiserror::Error;

use crate::{ElementType, ViewKind};

/// Error type for classification, descriptor and view construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The value is not one of the recognized view kinds.
    #[error("unsupported view: {found}")]
    UnsupportedView { found: &'static str },
    /// The byte count does not equal `length` elements of `kind`.
    #[error("malformed descriptor: {kind} with length {length} cannot hold {byte_length} bytes")]
    MalformedDescriptor {
        kind: ViewKind,
        length: usize,
        byte_length: usize,
    },
    /// The name is not a canonical view kind name.
    #[error("unknown view kind `{0}`")]
    UnknownKind(String),
    /// The view offset is not a multiple of the element size.
    #[error("byte offset {byte_offset} is not a multiple of the {element_type} element size")]
    Misaligned {
        element_type: ElementType,
        byte_offset: usize,
    },
    /// The requested window does not fit inside the region.
    #[error("view [{byte_offset}, +{byte_length}) is out of bounds for a region of {buffer_length} bytes")]
    OutOfBounds {
        byte_offset: usize,
        byte_length: usize,
        buffer_length: usize,
    },
    /// The byte size of `length` elements does not fit in `usize`.
    #[error("{length} elements of {element_type} overflow the addressable byte length")]
    LengthOverflow {
        element_type: ElementType,
        length: usize,
    },
}
