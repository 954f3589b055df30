#![forbid(unsafe_code)]

//! Remainder distribution across a fixed number of items.
//!
//! Every item receives `floor(total / count)` pixels. The `total mod count`
//! leftover pixels are handed out one at a time by a running fractional
//! accumulator so the `+1` adjustments are spread along the sequence instead
//! of clustering at either end. Whatever is still owed when the last position
//! is reached goes to the last item, so the plan always sums to `total`
//! unless the container is too small to give every item one pixel.
//!
//! ```
//! use fillsize_layout::{Axis, SizingRequest, distribute};
//!
//! let request = SizingRequest::new(4, 10, Axis::Primary).unwrap();
//! let plan = distribute(&request);
//! assert_eq!(plan.as_slice(), &[2, 3, 2, 3]);
//! assert_eq!(plan.total(), 10);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use fillsize_core::{Axis, Rect, Size, debug, trace};

/// Failures when building a sizing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizingError {
    /// The item count was zero; there is nothing to divide the extent by.
    ZeroItems,
}

impl fmt::Display for SizingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroItems => write!(f, "item count must be at least 1"),
        }
    }
}

impl std::error::Error for SizingError {}

/// Inputs to a distribution: how many items share how many pixels, and along
/// which axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SizingRequest {
    item_count: usize,
    total: u32,
    axis: Axis,
}

impl SizingRequest {
    /// Create a request. Fails with [`SizingError::ZeroItems`] when
    /// `item_count` is zero.
    pub fn new(item_count: usize, total: u32, axis: Axis) -> Result<Self, SizingError> {
        if item_count == 0 {
            return Err(SizingError::ZeroItems);
        }
        Ok(Self {
            item_count,
            total,
            axis,
        })
    }

    #[inline]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Container extent in pixels.
    #[inline]
    pub const fn total(&self) -> u32 {
        self.total
    }

    #[inline]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Base size of every item: `floor(total / count)`, never below 1.
    pub fn average(&self) -> u32 {
        // Quotient is at most `total`, so it fits back into u32.
        ((self.total as u64 / self.item_count as u64) as u32).max(1)
    }

    /// Pixels left over after giving every item the unclamped average.
    pub fn remainder(&self) -> u32 {
        (self.total as u64 % self.item_count as u64) as u32
    }

    /// Whether the container can give every item at least one pixel.
    ///
    /// When false, the plan deliberately exceeds `total`.
    #[inline]
    pub fn fits(&self) -> bool {
        self.total as u64 >= self.item_count as u64
    }

    /// Iterate item sizes in position order.
    pub fn sizes(&self) -> DistributedSizes {
        DistributedSizes::new(self)
    }
}

/// Item sizes for a [`SizingRequest`], produced one position at a time.
///
/// Useful when items are bound lazily in order; [`distribute`] simply
/// collects this iterator.
#[derive(Debug, Clone)]
pub struct DistributedSizes {
    item_count: usize,
    total: u32,
    average: u32,
    /// Remainder pixels not yet handed out. Stays zero when the request does
    /// not fit, which disables distribution entirely.
    pending: u32,
    accumulator: f64,
    position: usize,
    /// Sum of sizes yielded so far.
    consumed: u64,
}

impl DistributedSizes {
    fn new(request: &SizingRequest) -> Self {
        let pending = if request.fits() {
            request.remainder()
        } else {
            0
        };
        debug!(
            items = request.item_count(),
            total = request.total(),
            average = request.average(),
            remainder = request.remainder(),
            axis = request.axis().label(),
            "distributing item sizes"
        );
        Self {
            item_count: request.item_count(),
            total: request.total(),
            average: request.average(),
            pending,
            accumulator: 0.0,
            position: 0,
            consumed: 0,
        }
    }

    /// Per-step share of the pending remainder at the current position.
    fn step(&self) -> f64 {
        self.pending as f64 / (self.item_count - self.position) as f64
    }
}

impl Iterator for DistributedSizes {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.position >= self.item_count {
            return None;
        }

        let mut size = self.average;
        if self.pending > 0 {
            self.accumulator += self.step();
            if self.accumulator > 1.0 {
                size += 1;
                self.pending -= 1;
                self.accumulator = self.step();
                trace!(
                    position = self.position,
                    pending = self.pending,
                    accumulator = self.accumulator,
                    "extra pixel assigned"
                );
            }
        }
        self.consumed += size as u64;

        if self.position + 1 == self.item_count {
            let leftover = (self.total as u64).saturating_sub(self.consumed);
            if leftover > 0 {
                debug!(leftover, "adding leftover pixels to the last item");
                // `size + leftover` is what the last item needs to reach
                // `total`, which itself fits in u32.
                size += leftover as u32;
                self.consumed += leftover;
            }
            self.pending = 0;
        }

        self.position += 1;
        Some(size)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.item_count - self.position;
        (left, Some(left))
    }
}

impl ExactSizeIterator for DistributedSizes {}

impl FusedIterator for DistributedSizes {}

/// Compute the full size plan for a request.
pub fn distribute(request: &SizingRequest) -> SizePlan {
    let sizes: Vec<u32> = request.sizes().collect();
    let plan = SizePlan {
        sizes,
        axis: request.axis(),
        budget: request.total(),
    };
    if plan.is_over_budget() {
        debug!(
            items = request.item_count(),
            total = request.total(),
            planned = plan.total(),
            "container smaller than item count; plan exceeds budget"
        );
    }
    plan
}

/// Per-item sizes along one axis.
///
/// Sums to the request's total whenever the request [fits](SizingRequest::fits).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SizePlan {
    sizes: Vec<u32>,
    axis: Axis,
    budget: u32,
}

impl SizePlan {
    #[inline]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Size of the item at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.sizes.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.sizes
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u32>> {
        self.sizes.iter().copied()
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.sizes
    }

    #[inline]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// The container extent the plan was computed for.
    #[inline]
    pub const fn budget(&self) -> u32 {
        self.budget
    }

    /// Sum of all sizes. Widened so oversized plans cannot overflow.
    pub fn total(&self) -> u64 {
        self.sizes.iter().map(|&s| s as u64).sum()
    }

    /// True when the items need more pixels than the container has.
    pub fn is_over_budget(&self) -> bool {
        self.total() > self.budget as u64
    }

    /// Start offset of each item along the axis. Saturates at `u32::MAX`.
    pub fn offsets(&self) -> Vec<u32> {
        let mut cursor = 0u32;
        self.sizes
            .iter()
            .map(|&size| {
                let start = cursor;
                cursor = cursor.saturating_add(size);
                start
            })
            .collect()
    }

    /// Per-item sizes with the plan value on the plan's axis and `cross` on
    /// the other.
    pub fn extents(&self, cross: u32) -> Vec<Size> {
        self.sizes
            .iter()
            .map(|&size| Size::from_axis(self.axis, size, cross))
            .collect()
    }

    /// Lay items out contiguously from `area`'s origin along the plan's axis,
    /// each spanning the area's full cross extent.
    pub fn rects(&self, area: Rect) -> Vec<Rect> {
        self.offsets()
            .into_iter()
            .zip(self.sizes.iter())
            .map(|(offset, &size)| area.slice(self.axis, offset, size))
            .collect()
    }
}

impl<'a> IntoIterator for &'a SizePlan {
    type Item = u32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
