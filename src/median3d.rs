use std::ops::{Deref, DerefMut, Range};

use log::debug;

use crate::{accessor::VoxelAccessor, extent::Extent, selection::CandidateBuffer};

///
/// Borrows an accessor and puts the first three axes back where they were when
/// the guard is dropped, whichever way the borrowing scope is left.
///
struct PositionGuard<'a, A: VoxelAccessor>
{
    accessor: &'a mut A,
    saved: [usize; 3],
}

impl<'a, A: VoxelAccessor> PositionGuard<'a, A>
{
    fn new(accessor: &'a mut A) -> Self
    {
        let saved = std::array::from_fn(|axis| accessor.index(axis));
        Self { accessor, saved }
    }
}

impl<A: VoxelAccessor> Deref for PositionGuard<'_, A>
{
    type Target = A;

    fn deref(&self) -> &A {
        self.accessor
    }
}

impl<A: VoxelAccessor> DerefMut for PositionGuard<'_, A>
{
    fn deref_mut(&mut self) -> &mut A {
        self.accessor
    }
}

impl<A: VoxelAccessor> Drop for PositionGuard<'_, A>
{
    fn drop(&mut self) {
        for (axis, &index) in self.saved.iter().enumerate()
        {
            self.accessor.set_index(axis, index);
        }
    }
}

///
/// Adapter reporting, at each position, the median of the parent's samples in a
/// 3D neighbourhood around that position.
///
/// Near the edges of the volume the neighbourhood is clipped rather than
/// padded, so fewer samples contribute there. Axes beyond the third are not
/// filtered; they stay at whatever index the caller has set.
///
/// The adapter is itself a `VoxelAccessor`, so adapters can be stacked. Reading
/// a value moves the parent's position while scanning and restores it before
/// returning; the same parent must therefore not be read concurrently.
///
pub struct Median3D<A: VoxelAccessor>
{
    parent: A,
    extent: Extent,
    buffer: CandidateBuffer<A::Value>,
}

impl<A: VoxelAccessor> Median3D<A>
{
    ///
    /// Adapter with the default 3x3x3 neighbourhood.
    ///
    pub fn new(parent: A) -> Self
    {
        Self::with_extent(parent, Extent::default())
    }

    pub fn with_extent(parent: A, extent: Extent) -> Self
    {
        debug!("median3D adapter for image \"{}\" initialised with extent {}", parent.name(), extent);
        Self { buffer: CandidateBuffer::with_capacity(extent.volume()), parent, extent }
    }

    pub fn set_extent(&mut self, extent: Extent)
    {
        debug!("median3D adapter for image \"{}\" initialised with extent {}", self.parent.name(), extent);
        self.buffer = CandidateBuffer::with_capacity(extent.volume());
        self.extent = extent;
    }

    pub fn extent(&self) -> Extent
    {
        self.extent
    }

    pub fn parent(&self) -> &A
    {
        &self.parent
    }

    pub fn parent_mut(&mut self) -> &mut A
    {
        &mut self.parent
    }

    pub fn into_inner(self) -> A
    {
        self.parent
    }

    ///
    /// Neighbourhood of the current position along each of the first three axes.
    ///
    pub fn window(&self) -> [Range<usize>; 3]
    {
        std::array::from_fn(|axis| self.extent.window(axis, self.parent.index(axis), self.parent.size(axis)))
    }
}

impl<A: VoxelAccessor> VoxelAccessor for Median3D<A>
{
    type Value = A::Value;

    fn name(&self) -> &str {
        self.parent.name()
    }

    fn ndim(&self) -> usize {
        self.parent.ndim()
    }

    #[inline]
    fn size(&self, axis: usize) -> usize {
        self.parent.size(axis)
    }

    #[inline]
    fn index(&self, axis: usize) -> usize {
        self.parent.index(axis)
    }

    #[inline]
    fn set_index(&mut self, axis: usize, index: usize) {
        self.parent.set_index(axis, index)
    }

    ///
    /// Median of the neighbourhood of the current position. The position must lie
    /// inside the volume: an out-of-bounds position yields an empty window, which
    /// trips a debug assertion and otherwise returns negative infinity.
    ///
    fn value(&mut self) -> A::Value {
        let window = self.window();
        debug_assert!(window.iter().all(|w| !w.is_empty()), "position outside of \"{}\"", self.parent.name());
        self.buffer.reset(window.iter().map(|w| w.len()).product());

        let mut scan = PositionGuard::new(&mut self.parent);
        for k in window[2].clone()
        {
            scan.set_index(2, k);
            for j in window[1].clone()
            {
                scan.set_index(1, j);
                for i in window[0].clone()
                {
                    scan.set_index(0, i);
                    self.buffer.offer(scan.value());
                }
            }
        }
        drop(scan);
        self.buffer.median()
    }
}
