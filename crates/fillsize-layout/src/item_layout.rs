#![forbid(unsafe_code)]

//! Cached size plan for a container whose extent or item count may change.

use fillsize_core::{Axis, debug};

use crate::distribute::{SizePlan, SizingError, SizingRequest, distribute};

/// Answers per-index size queries for a list of items filling a container.
///
/// The plan is computed on first use and kept until the extent, item count
/// or axis actually changes. Setting a value to what it already is keeps the
/// cached plan.
#[derive(Debug, Clone)]
pub struct ItemLayout {
    request: SizingRequest,
    plan: Option<SizePlan>,
    recomputes: u64,
}

impl ItemLayout {
    /// Create a layout for `item_count` items sharing `total` pixels.
    pub fn new(item_count: usize, total: u32, axis: Axis) -> Result<Self, SizingError> {
        Ok(Self::from_request(SizingRequest::new(item_count, total, axis)?))
    }

    pub fn from_request(request: SizingRequest) -> Self {
        Self {
            request,
            plan: None,
            recomputes: 0,
        }
    }

    #[inline]
    pub fn request(&self) -> &SizingRequest {
        &self.request
    }

    /// Change the container extent.
    pub fn set_total(&mut self, total: u32) {
        if total != self.request.total() {
            self.replace(self.rebuild(self.request.item_count(), total, self.request.axis()));
        }
    }

    /// Change the number of items. Zero is rejected and leaves the layout
    /// untouched.
    pub fn set_item_count(&mut self, item_count: usize) -> Result<(), SizingError> {
        if item_count != self.request.item_count() {
            let request = SizingRequest::new(item_count, self.request.total(), self.request.axis())?;
            self.replace(request);
        }
        Ok(())
    }

    pub fn set_axis(&mut self, axis: Axis) {
        if axis != self.request.axis() {
            self.replace(self.rebuild(self.request.item_count(), self.request.total(), axis));
        }
    }

    /// The current plan, computed if the inputs changed since the last call.
    pub fn plan(&mut self) -> &SizePlan {
        if self.plan.is_none() {
            self.recomputes += 1;
        }
        self.plan.get_or_insert_with(|| distribute(&self.request))
    }

    /// Size of the item at `index`, or `None` past the end.
    pub fn size_at(&mut self, index: usize) -> Option<u32> {
        self.plan().get(index)
    }

    /// Number of plans computed so far.
    #[inline]
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// Drop the cached plan without changing the inputs.
    pub fn invalidate(&mut self) {
        self.plan = None;
    }

    fn rebuild(&self, item_count: usize, total: u32, axis: Axis) -> SizingRequest {
        // The current count is already known to be non-zero.
        SizingRequest::new(item_count, total, axis).unwrap_or(self.request)
    }

    fn replace(&mut self, request: SizingRequest) {
        debug!(
            items = request.item_count(),
            total = request.total(),
            axis = request.axis().label(),
            "layout inputs changed; dropping cached plan"
        );
        self.request = request;
        self.plan = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_items() {
        assert_eq!(
            ItemLayout::new(0, 100, Axis::Primary).unwrap_err(),
            SizingError::ZeroItems
        );
    }

    #[test]
    fn plan_is_cached() {
        let mut layout = ItemLayout::new(4, 10, Axis::Primary).unwrap();
        assert_eq!(layout.size_at(1), Some(3));
        assert_eq!(layout.size_at(0), Some(2));
        assert_eq!(layout.size_at(4), None);
        assert_eq!(layout.recompute_count(), 1);
    }

    #[test]
    fn unchanged_inputs_keep_cache() {
        let mut layout = ItemLayout::new(4, 10, Axis::Primary).unwrap();
        layout.plan();
        layout.set_total(10);
        layout.set_item_count(4).unwrap();
        layout.set_axis(Axis::Primary);
        layout.plan();
        assert_eq!(layout.recompute_count(), 1);
    }

    #[test]
    fn resize_recomputes() {
        let mut layout = ItemLayout::new(4, 10, Axis::Primary).unwrap();
        assert_eq!(layout.plan().total(), 10);
        layout.set_total(13);
        assert_eq!(layout.plan().total(), 13);
        assert_eq!(layout.recompute_count(), 2);
    }

    #[test]
    fn item_count_change_recomputes() {
        let mut layout = ItemLayout::new(4, 10, Axis::Primary).unwrap();
        layout.plan();
        layout.set_item_count(5).unwrap();
        assert_eq!(layout.plan().len(), 5);
        assert_eq!(layout.plan().as_slice(), &[2, 2, 2, 2, 2]);
        assert_eq!(layout.recompute_count(), 2);
    }

    #[test]
    fn zero_item_count_leaves_layout_intact() {
        let mut layout = ItemLayout::new(4, 10, Axis::Primary).unwrap();
        layout.plan();
        assert_eq!(layout.set_item_count(0), Err(SizingError::ZeroItems));
        assert_eq!(layout.request().item_count(), 4);
        assert_eq!(layout.size_at(3), Some(3));
        assert_eq!(layout.recompute_count(), 1);
    }

    #[test]
    fn axis_change_recomputes() {
        let mut layout = ItemLayout::new(2, 5, Axis::Primary).unwrap();
        assert_eq!(layout.plan().axis(), Axis::Primary);
        layout.set_axis(Axis::Secondary);
        assert_eq!(layout.plan().axis(), Axis::Secondary);
        assert_eq!(layout.recompute_count(), 2);
    }

    #[test]
    fn invalidate_forces_recompute() {
        let mut layout = ItemLayout::new(2, 5, Axis::Primary).unwrap();
        layout.plan();
        layout.invalidate();
        layout.plan();
        assert_eq!(layout.recompute_count(), 2);
    }
}
