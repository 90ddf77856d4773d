//! The closed set of view kinds and the numeric element types behind them.

use std::fmt;
use std::str::FromStr;

use crate::ViewError;

/// Tag identifying the concrete representation of a binary value.
///
/// The set is closed. Declaration order is the classification order used by
/// [`classify`](crate::classify): the whole byte buffer comes first, then the
/// untyped region, then the numeric array kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "&'static str", try_from = "String")
)]
pub enum ViewKind {
    /// A whole, owned byte buffer.
    Buffer,
    /// An untyped fixed-size memory region.
    ArrayBuffer,
    /// 8-bit signed integers.
    Int8,
    /// 8-bit unsigned integers.
    Uint8,
    /// 8-bit unsigned integers, clamped on write.
    Uint8Clamped,
    /// 16-bit signed integers.
    Int16,
    /// 16-bit unsigned integers.
    Uint16,
    /// 32-bit signed integers.
    Int32,
    /// 32-bit unsigned integers.
    Uint32,
    /// 32-bit floats.
    Float32,
    /// 64-bit floats.
    Float64,
}

impl ViewKind {
    /// Every kind, in classification order.
    pub const ALL: [ViewKind; 11] = [
        ViewKind::Buffer,
        ViewKind::ArrayBuffer,
        ViewKind::Int8,
        ViewKind::Uint8,
        ViewKind::Uint8Clamped,
        ViewKind::Int16,
        ViewKind::Uint16,
        ViewKind::Int32,
        ViewKind::Uint32,
        ViewKind::Float32,
        ViewKind::Float64,
    ];

    /// Canonical name, also used as the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            ViewKind::Buffer => "Buffer",
            ViewKind::ArrayBuffer => "ArrayBuffer",
            ViewKind::Int8 => "Int8Array",
            ViewKind::Uint8 => "Uint8Array",
            ViewKind::Uint8Clamped => "Uint8ClampedArray",
            ViewKind::Int16 => "Int16Array",
            ViewKind::Uint16 => "Uint16Array",
            ViewKind::Int32 => "Int32Array",
            ViewKind::Uint32 => "Uint32Array",
            ViewKind::Float32 => "Float32Array",
            ViewKind::Float64 => "Float64Array",
        }
    }

    /// Numeric element type for array kinds, `None` for the two whole-buffer
    /// kinds.
    pub fn element_type(self) -> Option<ElementType> {
        match self {
            ViewKind::Buffer | ViewKind::ArrayBuffer => None,
            ViewKind::Int8 => Some(ElementType::Int8),
            ViewKind::Uint8 => Some(ElementType::Uint8),
            ViewKind::Uint8Clamped => Some(ElementType::Uint8Clamped),
            ViewKind::Int16 => Some(ElementType::Int16),
            ViewKind::Uint16 => Some(ElementType::Uint16),
            ViewKind::Int32 => Some(ElementType::Int32),
            ViewKind::Uint32 => Some(ElementType::Uint32),
            ViewKind::Float32 => Some(ElementType::Float32),
            ViewKind::Float64 => Some(ElementType::Float64),
        }
    }

    /// Bytes per logical element: 1 for the whole-buffer kinds, the numeric
    /// width otherwise.
    pub fn element_size(self) -> usize {
        self.element_type().map_or(1, ElementType::size)
    }

    /// Byte count of `length` elements of this kind, `None` on overflow.
    pub fn byte_length_of(self, length: usize) -> Option<usize> {
        length.checked_mul(self.element_size())
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewKind {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ViewError::UnknownKind(s.to_owned()))
    }
}

impl From<ViewKind> for &'static str {
    fn from(kind: ViewKind) -> Self {
        kind.name()
    }
}

impl TryFrom<String> for ViewKind {
    type Error = ViewError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<ElementType> for ViewKind {
    fn from(element_type: ElementType) -> Self {
        match element_type {
            ElementType::Int8 => ViewKind::Int8,
            ElementType::Uint8 => ViewKind::Uint8,
            ElementType::Uint8Clamped => ViewKind::Uint8Clamped,
            ElementType::Int16 => ViewKind::Int16,
            ElementType::Uint16 => ViewKind::Uint16,
            ElementType::Int32 => ViewKind::Int32,
            ElementType::Uint32 => ViewKind::Uint32,
            ElementType::Float32 => ViewKind::Float32,
            ElementType::Float64 => ViewKind::Float64,
        }
    }
}

/// Element of a numeric array view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// 8-bit signed integers.
    Int8,
    /// 8-bit unsigned integers.
    Uint8,
    /// 8-bit unsigned integers, clamped on write.
    Uint8Clamped,
    /// 16-bit signed integers.
    Int16,
    /// 16-bit unsigned integers.
    Uint16,
    /// 32-bit signed integers.
    Int32,
    /// 32-bit unsigned integers.
    Uint32,
    /// 32-bit floats.
    Float32,
    /// 64-bit floats.
    Float64,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ViewKind::from(*self).name())
    }
}

impl ElementType {
    /// Every element type, in classification order.
    pub const ALL: [ElementType; 9] = [
        ElementType::Int8,
        ElementType::Uint8,
        ElementType::Uint8Clamped,
        ElementType::Int16,
        ElementType::Uint16,
        ElementType::Int32,
        ElementType::Uint32,
        ElementType::Float32,
        ElementType::Float64,
    ];

    /// Width of one element in bytes.
    pub fn size(self) -> usize {
        match self {
            ElementType::Int8 | ElementType::Uint8 | ElementType::Uint8Clamped => 1,
            ElementType::Int16 | ElementType::Uint16 => 2,
            ElementType::Int32 | ElementType::Uint32 | ElementType::Float32 => 4,
            ElementType::Float64 => 8,
        }
    }

    /// Decodes one element from exactly `self.size()` native-endian bytes.
    pub(crate) fn decode(self, bytes: &[u8]) -> f64 {
        match self {
            ElementType::Int8 => bytes[0] as i8 as f64,
            ElementType::Uint8 | ElementType::Uint8Clamped => bytes[0] as f64,
            ElementType::Int16 => i16::from_ne_bytes([bytes[0], bytes[1]]) as f64,
            ElementType::Uint16 => u16::from_ne_bytes([bytes[0], bytes[1]]) as f64,
            ElementType::Int32 => i32::from_ne_bytes(word(bytes)) as f64,
            ElementType::Uint32 => u32::from_ne_bytes(word(bytes)) as f64,
            ElementType::Float32 => f32::from_ne_bytes(word(bytes)) as f64,
            ElementType::Float64 => f64::from_ne_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ]),
        }
    }

    /// Converts `value` to this element type and writes its native-endian
    /// bytes into `out`, which holds exactly `self.size()` bytes.
    ///
    /// Integer types truncate toward zero and wrap modulo `2^bits`, mapping
    /// NaN and infinities to zero. `Uint8Clamped` saturates to `0..=255` and
    /// rounds half to even.
    pub(crate) fn encode(self, value: f64, out: &mut [u8]) {
        match self {
            ElementType::Int8 | ElementType::Uint8 => out[0] = wrap(value, 8) as u8,
            ElementType::Uint8Clamped => out[0] = clamp_u8(value),
            ElementType::Int16 | ElementType::Uint16 => {
                out.copy_from_slice(&(wrap(value, 16) as u16).to_ne_bytes())
            }
            ElementType::Int32 | ElementType::Uint32 => {
                out.copy_from_slice(&(wrap(value, 32) as u32).to_ne_bytes())
            }
            ElementType::Float32 => out.copy_from_slice(&(value as f32).to_ne_bytes()),
            ElementType::Float64 => out.copy_from_slice(&value.to_ne_bytes()),
        }
    }
}

fn word(bytes: &[u8]) -> [u8; 4] {
    [bytes[0], bytes[1], bytes[2], bytes[3]]
}

/// Truncates `value` and reduces it modulo `2^bits` into `0..2^bits`.
/// Signed element types reinterpret the low bits, which yields the usual
/// two's complement wrap.
fn wrap(value: f64, bits: i32) -> u64 {
    if !value.is_finite() {
        return 0;
    }
    let modulus = 2f64.powi(bits);
    let rem = value.trunc() % modulus;
    let rem = if rem < 0.0 { rem + modulus } else { rem };
    rem as u64
}

fn clamp_u8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round_ties_even() as u8
}
