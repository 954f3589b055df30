//! Property-based invariant tests for geometry primitives (Axis, Size, Rect).
//!
//! 1. `Size::from_axis` and `Size::along` agree on both axes.
//! 2. Slices stay inside the parent's cross extent.
//! 3. No panics on extreme u32 values.

use fillsize_core::{Axis, Rect, Size};
use proptest::prelude::*;

fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::Primary), Just(Axis::Secondary)]
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<u32>())
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn from_axis_round_trips_extents(axis in axis_strategy(), along in any::<u32>(), cross in any::<u32>()) {
        let size = Size::from_axis(axis, along, cross);
        prop_assert_eq!(size.along(axis), along);
        prop_assert_eq!(size.along(axis.cross()), cross);
    }

    #[test]
    fn slice_keeps_cross_extent(rect in rect_strategy(), axis in axis_strategy(), offset in any::<u32>(), len in any::<u32>()) {
        let slice = rect.slice(axis, offset, len);
        prop_assert_eq!(slice.extent(axis), len);
        prop_assert_eq!(slice.extent(axis.cross()), rect.extent(axis.cross()));
        prop_assert_eq!(slice.start(axis.cross()), rect.start(axis.cross()));
        prop_assert!(slice.start(axis) >= rect.start(axis));
    }

    #[test]
    fn extreme_values_do_not_panic(rect in rect_strategy(), x in any::<u32>(), y in any::<u32>()) {
        let _ = rect.right();
        let _ = rect.bottom();
        let _ = rect.contains(x, y);
        let _ = rect.is_empty();
    }
}
