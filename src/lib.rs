//!
//! Median filtering of volumetric data through a composable accessor adapter.
//!
//! A [`median3d::Median3D`] wraps any [`accessor::VoxelAccessor`] and reports, at
//! the current position, the median of the samples in a 3D neighbourhood that is
//! clipped (never padded) at the edges of the volume.
//!
pub mod accessor;
pub mod errors;
pub mod extent;
pub mod filter;
pub mod iterators;
pub mod median3d;
pub mod selection;
pub mod serialization;
pub mod utilities;
pub mod volume;
