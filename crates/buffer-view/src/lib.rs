//! Portable descriptors for binary views.
//!
//! Given a value that may be a byte buffer, an untyped memory region or a
//! numeric array view over shared memory, this crate identifies its kind,
//! extracts a self-contained [`Descriptor`] and rebuilds a value of the same
//! kind from it. How a descriptor travels between the two ends is left to
//! the caller; with the default `serde` feature it can go through any serde
//! format.
//!
//! # Overview
//!
//! - [`classify`] - Maps a [`Value`] to its [`ViewKind`]
//! - [`to_descriptor`] - Copies out a view's bytes as a [`Descriptor`]
//! - [`from_descriptor`] - Rebuilds a [`Value`] from a [`Descriptor`]
//! - [`is_supported_view`] - Cheap check before attempting extraction
//!
//! # Example
//!
//! ```
//! use buffer_view::{
//!     classify, from_descriptor, to_descriptor, ArrayBuffer, ElementType, TypedArray, Value,
//!     ViewKind,
//! };
//!
//! // A 16-bit view over the middle of a larger region.
//! let region = ArrayBuffer::from_vec((0u8..64).collect());
//! let view = TypedArray::new(ElementType::Uint16, region, 16, 4).unwrap();
//!
//! let descriptor = to_descriptor(&Value::from(view)).unwrap();
//! assert_eq!(descriptor.kind(), ViewKind::Uint16);
//! assert_eq!(descriptor.length(), 4);
//! assert_eq!(descriptor.bytes(), &(16u8..24).collect::<Vec<_>>()[..]);
//!
//! let rebuilt = from_descriptor(descriptor);
//! assert_eq!(classify(&rebuilt), Ok(ViewKind::Uint16));
//! ```

mod array_buffer;
mod classify;
mod descriptor;
mod error;
mod extract;
mod kind;
mod reconstruct;
mod typed_array;
mod value;
mod view;

pub use array_buffer::ArrayBuffer;
pub use classify::{classify, is_supported_view};
pub use descriptor::Descriptor;
pub use error::ViewError;
pub use extract::{logical_length, to_descriptor};
pub use kind::{ElementType, ViewKind};
pub use reconstruct::from_descriptor;
pub use typed_array::TypedArray;
pub use value::Value;
pub use view::{ArrayBufferView, Buffer, DataView};
