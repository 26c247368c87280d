use log::trace;

use crate::{accessor::{VoxelAccessor, VoxelWriter}, errors::VxError, extent::Extent, iterators::position_iterator::PositionIterator, median3d::Median3D};

///
/// Median-filters `source` into `destination` over the first three axes.
///
/// Every position of the destination is visited, including positions along
/// axes beyond the third, which are filtered independently of each other.
/// Both accessors must have the same shape. Their positions are left as they
/// were on entry.
///
pub fn median_filter_3d<S, D>(source: S, destination: &mut D, extent: Extent) -> Result<(), VxError>
where
    S: VoxelAccessor,
    D: VoxelWriter<Value = S::Value>,
{
    if source.shape() != destination.shape()
    {
        return Err(VxError::ShapeMismatch);
    }
    let source_position = source.position();
    let destination_position = destination.position();

    let mut median = Median3D::with_extent(source, extent);
    let shape = destination.shape();
    for position in PositionIterator::new(&shape)
    {
        median.set_position(&position);
        destination.set_position(&position);
        destination.set_value(median.value());
    }

    median.set_position(&source_position);
    destination.set_position(&destination_position);
    trace!("median filtered \"{}\" into \"{}\" ({} voxels, extent {})", median.name(), destination.name(), destination.voxel_count(), extent);
    Ok(())
}
