use crate::utilities::float::Float;

///
/// Cursor-style access to a volume: a current position (one index per axis),
/// the sample stored at that position, and the volume's extents.
///
/// Axes at or beyond `ndim()` behave as singleton axes: size 1, index 0.
///
pub trait VoxelAccessor
{
    type Value: Float;

    /// Name used in diagnostics.
    fn name(&self) -> &str;
    fn ndim(&self) -> usize;
    fn size(&self, axis: usize) -> usize;
    fn index(&self, axis: usize) -> usize;
    fn set_index(&mut self, axis: usize, index: usize);
    /// Sample at the current position.
    fn value(&mut self) -> Self::Value;

    fn shape(&self) -> Vec<usize>
    {
        (0..self.ndim()).map(|axis| self.size(axis)).collect()
    }

    fn position(&self) -> Vec<usize>
    {
        (0..self.ndim()).map(|axis| self.index(axis)).collect()
    }

    fn set_position(&mut self, position: &[usize])
    {
        for (axis, &index) in position.iter().enumerate()
        {
            self.set_index(axis, index);
        }
    }

    fn voxel_count(&self) -> usize
    {
        (0..self.ndim()).map(|axis| self.size(axis)).product()
    }
}

///
/// Accessor that can also store a sample at the current position.
///
pub trait VoxelWriter : VoxelAccessor
{
    fn set_value(&mut self, value: Self::Value);
}

impl<A: VoxelAccessor + ?Sized> VoxelAccessor for &mut A
{
    type Value = A::Value;

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
    #[inline]
    fn ndim(&self) -> usize {
        (**self).ndim()
    }
    #[inline]
    fn size(&self, axis: usize) -> usize {
        (**self).size(axis)
    }
    #[inline]
    fn index(&self, axis: usize) -> usize {
        (**self).index(axis)
    }
    #[inline]
    fn set_index(&mut self, axis: usize, index: usize) {
        (**self).set_index(axis, index)
    }
    #[inline]
    fn value(&mut self) -> Self::Value {
        (**self).value()
    }
}

impl<A: VoxelWriter + ?Sized> VoxelWriter for &mut A
{
    #[inline]
    fn set_value(&mut self, value: Self::Value) {
        (**self).set_value(value)
    }
}
