//! Property tests: any window of any region survives extract + rebuild.

use buffer_view::{
    classify, from_descriptor, to_descriptor, ArrayBuffer, ArrayBufferView, Buffer, ElementType,
    TypedArray, Value, ViewKind,
};
use proptest::prelude::*;

fn element_type() -> impl Strategy<Value = ElementType> {
    prop::sample::select(ElementType::ALL.to_vec())
}

proptest! {
    #[test]
    fn typed_window_roundtrip(
        element_type in element_type(),
        region in prop::collection::vec(any::<u8>(), 0..256),
        start in 0usize..64,
        count in 0usize..32,
    ) {
        let size = element_type.size();
        let byte_offset = (start * size).min(region.len() / size * size);
        let length = count.min((region.len() - byte_offset) / size);
        let backing = ArrayBuffer::from_vec(region.clone());
        let view = TypedArray::new(element_type, backing.clone(), byte_offset, length).unwrap();

        let descriptor = to_descriptor(&Value::from(view)).unwrap();
        prop_assert_eq!(descriptor.kind(), ViewKind::from(element_type));
        prop_assert_eq!(descriptor.length(), length);
        prop_assert_eq!(descriptor.bytes(), &region[byte_offset..byte_offset + length * size]);

        backing.fill(0x5A);
        prop_assert_eq!(descriptor.bytes(), &region[byte_offset..byte_offset + length * size]);

        let rebuilt = from_descriptor(descriptor);
        prop_assert_eq!(classify(&rebuilt), Ok(ViewKind::from(element_type)));
        let Value::TypedArray(rebuilt) = rebuilt else {
            panic!("expected a typed array");
        };
        prop_assert_eq!(rebuilt.len(), length);
        prop_assert_eq!(
            rebuilt.to_vec(),
            region[byte_offset..byte_offset + length * size].to_vec()
        );
    }

    #[test]
    fn whole_buffer_roundtrip(
        bytes in prop::collection::vec(any::<u8>(), 0..256),
        as_region in any::<bool>(),
    ) {
        let value = if as_region {
            Value::from(ArrayBuffer::from_vec(bytes.clone()))
        } else {
            Value::from(Buffer::from_vec(bytes.clone()))
        };
        let kind = classify(&value).unwrap();
        let descriptor = to_descriptor(&value).unwrap();
        prop_assert_eq!(descriptor.length(), bytes.len());

        let rebuilt = from_descriptor(descriptor);
        prop_assert_eq!(classify(&rebuilt), Ok(kind));
        let rebuilt_bytes = match rebuilt {
            Value::ArrayBuffer(region) => region.to_vec(),
            Value::Buffer(buf) => buf.to_vec(),
            other => panic!("unexpected {other:?}"),
        };
        prop_assert_eq!(rebuilt_bytes, bytes);
    }
}
