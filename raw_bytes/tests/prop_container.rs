//! Property-based tests for the raw_bytes container.

use proptest::prelude::*;

use raw_bytes::{Container, ContainerError};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck_derive::Pod, bytemuck_derive::Zeroable)]
struct P {
    a: u32,
    b: u32,
}

proptest! {
    #[test]
    fn prop_push_read(values: Vec<(u32, u32)>) {
        let mut c = Container::<P>::new();

        for (a, b) in &values {
            c.push(P { a: *a, b: *b });
        }

        prop_assert_eq!(c.len(), values.len());
        prop_assert!(c.capacity() >= c.len());

        for (i, (a, b)) in values.iter().enumerate() {
            let v = c.get(i).unwrap();
            prop_assert_eq!(v.a, *a);
            prop_assert_eq!(v.b, *b);
        }

        prop_assert_eq!(
            c.get(values.len()),
            Err(ContainerError::OutOfBounds { index: values.len(), len: values.len() })
        );
    }
}

proptest! {
    #[test]
    fn prop_random_write(values in prop::collection::vec(any::<u8>(), 1..200), index in 0usize..1000, new_val: u8) {
        let mut c = Container::from_slice(&values);

        let i = index % values.len();
        c.write(i, new_val).unwrap();
        prop_assert_eq!(c[i], new_val);

        for (j, &v) in values.iter().enumerate() {
            if j != i {
                prop_assert_eq!(c[j], v);
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_pop_mirrors_vec(values in prop::collection::vec(any::<u8>(), 0..100)) {
        let mut c = Container::from_slice(&values);
        let mut model = values.clone();

        while let Some(expected) = model.pop() {
            prop_assert_eq!(c.pop(), Some(expected));
            prop_assert_eq!(c.as_slice(), model.as_slice());
        }
        prop_assert_eq!(c.pop(), None);
        prop_assert!(c.is_empty());
    }
}

proptest! {
    #[test]
    fn prop_with_capacity_preallocates(capacity in 0usize..500) {
        let c = Container::<u8>::with_capacity(capacity);
        prop_assert!(c.capacity() >= capacity);
        prop_assert_eq!(c.len(), 0);
    }
}
