//! Classification of values into [`ViewKind`]s.

use crate::{Value, ViewError, ViewKind};

impl ViewKind {
    /// Whether `value` is a representation of this kind.
    ///
    /// Predicates overlap: a [`Buffer`](crate::Buffer) is also an unsigned
    /// 8-bit array, so both `Buffer` and `Uint8` match it. [`classify`]
    /// resolves the overlap by precedence.
    pub fn matches(self, value: &Value) -> bool {
        match (self, value) {
            (ViewKind::Buffer, Value::Buffer(_)) => true,
            (ViewKind::ArrayBuffer, Value::ArrayBuffer(_)) => true,
            (ViewKind::Uint8, Value::Buffer(_)) => true,
            (kind, Value::TypedArray(view)) => kind.element_type() == Some(view.element_type()),
            _ => false,
        }
    }
}

/// Returns the first kind in [`ViewKind::ALL`] that matches `value`.
///
/// # Example
///
/// ```
/// use buffer_view::{classify, Buffer, Value, ViewKind};
///
/// let value = Value::from(Buffer::from_slice(&[1, 2]));
/// assert_eq!(classify(&value), Ok(ViewKind::Buffer));
/// assert!(classify(&Value::Null).is_err());
/// ```
pub fn classify(value: &Value) -> Result<ViewKind, ViewError> {
    ViewKind::ALL
        .into_iter()
        .find(|kind| kind.matches(value))
        .ok_or(ViewError::UnsupportedView {
            found: value.type_name(),
        })
}

/// Whether `value` is any binary view: an untyped region or anything with
/// the [`ArrayBufferView`](crate::ArrayBufferView) capability.
///
/// This is wider than [`classify`]: a [`DataView`](crate::DataView) passes
/// here but is not a classified kind.
pub fn is_supported_view(value: &Value) -> bool {
    matches!(value, Value::ArrayBuffer(_)) || value.as_view().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArrayBuffer, Buffer, DataView, ElementType, TypedArray};

    #[test]
    fn buffer_takes_precedence_over_uint8() {
        let value = Value::from(Buffer::from_slice(&[1, 2, 3]));
        assert!(ViewKind::Uint8.matches(&value));
        assert!(ViewKind::Buffer.matches(&value));
        assert!(!ViewKind::ArrayBuffer.matches(&value));
        assert_eq!(classify(&value), Ok(ViewKind::Buffer));
    }

    #[test]
    fn each_numeric_kind_matches_only_itself() {
        for element_type in ElementType::ALL {
            let value = Value::from(TypedArray::with_length(element_type, 2).unwrap());
            let matching: Vec<ViewKind> = ViewKind::ALL
                .into_iter()
                .filter(|kind| kind.matches(&value))
                .collect();
            assert_eq!(matching, vec![ViewKind::from(element_type)]);
        }
    }

    #[test]
    fn data_view_is_supported_but_unclassified() {
        let value = Value::from(DataView::new(ArrayBuffer::new(4), 0, 4).unwrap());
        assert!(is_supported_view(&value));
        assert_eq!(
            classify(&value),
            Err(ViewError::UnsupportedView { found: "DataView" })
        );
    }

    #[test]
    fn scalars_are_rejected() {
        for value in [
            Value::Null,
            Value::from(1.5),
            Value::from("text"),
            Value::from(true),
        ] {
            assert!(!is_supported_view(&value));
            assert!(matches!(
                classify(&value),
                Err(ViewError::UnsupportedView { .. })
            ));
        }
    }
}
