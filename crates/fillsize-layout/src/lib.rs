#![forbid(unsafe_code)]

//! Fill-the-container item sizing.
//!
//! This crate sizes a row (or column) of items so they exactly fill a
//! container along one axis:
//!
//! - [`distribute`] - one-shot [`SizePlan`] for a [`SizingRequest`]
//! - [`DistributedSizes`] - the same sizes, yielded position by position
//! - [`ItemLayout`] - cached plan with per-index queries, recomputed on resize
//! - [`SegmentTemplate`] - fills image URL placeholders with item extents
//!
//! # Example
//!
//! ```
//! use fillsize_layout::{Axis, ItemLayout, Rect};
//!
//! let mut layout = ItemLayout::new(3, 100, Axis::Primary).unwrap();
//! let rects = layout.plan().rects(Rect::new(0, 0, 100, 40));
//! assert_eq!(rects.last().unwrap().right(), 100);
//! ```

pub mod distribute;
pub mod item_layout;
pub mod segments;

pub use distribute::{DistributedSizes, SizePlan, SizingError, SizingRequest, distribute};
pub use fillsize_core::geometry::{Axis, Rect, Size};
pub use item_layout::ItemLayout;
pub use segments::{HEIGHT_SEGMENT, SegmentTemplate, WIDTH_SEGMENT};
