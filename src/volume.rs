use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{accessor::{VoxelAccessor, VoxelWriter}, errors::VxError, utilities::float::Float};

///
/// Dense N-dimensional volume held in memory, with axis 0 varying fastest.
///
/// The volume carries its own current position and therefore acts directly as a
/// `VoxelAccessor`. Clone it to get an independent cursor over the same samples.
///
/// Deserialized volumes are checked for consistent shape, sample count and
/// position before they are handed out.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "VolumeData<T>", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Volume<T: Float>
{
    name: String,
    shape: Vec<usize>,
    strides: Vec<usize>,
    data: Vec<T>,
    position: Vec<usize>,
}

/// Unchecked serialized form of `Volume`.
#[derive(Deserialize)]
struct VolumeData<T>
{
    name: String,
    shape: Vec<usize>,
    strides: Vec<usize>,
    data: Vec<T>,
    position: Vec<usize>,
}

impl<T: Float> TryFrom<VolumeData<T>> for Volume<T>
{
    type Error = VxError;

    fn try_from(value: VolumeData<T>) -> Result<Self, Self::Error> {
        let VolumeData { name, shape, strides, data, position } = value;
        let volume = Self { name, shape, strides, data, position };
        volume.validate()?;
        Ok(volume)
    }
}

fn strides_of(shape: &[usize]) -> Vec<usize>
{
    let mut strides = Vec::with_capacity(shape.len());
    let mut stride = 1;
    for &size in shape
    {
        strides.push(stride);
        stride *= size;
    }
    strides
}

impl<T: Float> Volume<T>
{
    ///
    /// Zero-filled volume.
    ///
    pub fn new(name: &str, shape: &[usize]) -> Result<Self, VxError>
    {
        Self::filled(name, shape, T::zero())
    }

    pub fn filled(name: &str, shape: &[usize], value: T) -> Result<Self, VxError>
    {
        let len = shape.iter().product();
        Self::from_data(name, shape, vec![value; len])
    }

    ///
    /// Wraps existing samples. `data` must hold exactly one sample per voxel,
    /// ordered with axis 0 varying fastest.
    ///
    pub fn from_data(name: &str, shape: &[usize], data: Vec<T>) -> Result<Self, VxError>
    {
        if shape.is_empty() || shape.contains(&0) || shape.iter().product::<usize>() != data.len()
        {
            return Err(VxError::ShapeMismatch);
        }
        Ok(Self { name: name.to_owned(), shape: shape.to_vec(), strides: strides_of(shape), data, position: vec![0; shape.len()] })
    }

    pub fn data(&self) -> &[T]
    {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T]
    {
        &mut self.data
    }

    pub fn len(&self) -> usize
    {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.data.is_empty()
    }

    ///
    /// Linear offset of `position` into `data()`, or `None` when out of bounds.
    ///
    pub fn offset(&self, position: &[usize]) -> Option<usize>
    {
        if position.len() != self.shape.len()
        {
            return None;
        }
        let mut offset = 0;
        for ((&index, &size), &stride) in position.iter().zip(&self.shape).zip(&self.strides)
        {
            if index >= size
            {
                return None;
            }
            offset += index * stride;
        }
        Some(offset)
    }

    pub fn get(&self, position: &[usize]) -> Option<T>
    {
        self.offset(position).map(|offset| self.data[offset])
    }

    #[inline]
    fn current_offset(&self) -> usize
    {
        self.position.iter().zip(&self.strides).map(|(index, stride)| index * stride).sum()
    }

    fn validate(&self) -> Result<(), VxError>
    {
        if self.shape.is_empty() || self.shape.contains(&0)
            || self.shape.iter().try_fold(1usize, |len, &size| len.checked_mul(size)) != Some(self.data.len())
            || self.strides != strides_of(&self.shape)
            || self.position.len() != self.shape.len()
            || self.position.iter().zip(&self.shape).any(|(index, size)| index >= size)
        {
            return Err(VxError::DeserializationFailed);
        }
        Ok(())
    }
}

impl<T: Float + Serialize + DeserializeOwned> Volume<T>
{
    ///
    /// Writes volume to file with the specified serialization format.
    ///
    pub fn write(&self, path: &str, format: crate::serialization::SerializationFormat) -> Result<(), VxError>
    {
        use std::io::Write;
        let mut file = std::io::BufWriter::new(std::fs::File::create(path).map_err(|_|VxError::FileIOError)?);
        let buffer = self.write_buffer(format)?;
        file.write_all(&buffer).map_err(|_|VxError::WriteBufferFailed)?;
        file.flush().map_err(|_|VxError::WriteBufferFailed)?;
        Ok(())
    }

    pub fn write_buffer(&self, format: crate::serialization::SerializationFormat) -> Result<Vec<u8>, VxError>
    {
        crate::serialization::serialize(self, format)
    }

    ///
    /// Reads a volume from buffer, rejecting data whose shape and sample count disagree.
    ///
    pub fn read_buffer(buffer: &[u8], format: crate::serialization::SerializationFormat) -> Result<Self, VxError>
    {
        crate::serialization::deserialize(buffer, format)
    }

    pub fn read<Reader: std::io::Read>(mut reader: Reader, format: crate::serialization::SerializationFormat) -> Result<Self, VxError>
    {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(|_|VxError::ReadBufferFailed)?;
        Self::read_buffer(&bytes, format)
    }
}

impl<T: Float> VoxelAccessor for Volume<T>
{
    type Value = T;

    fn name(&self) -> &str {
        &self.name
    }

    fn ndim(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    fn size(&self, axis: usize) -> usize {
        self.shape.get(axis).copied().unwrap_or(1)
    }

    #[inline]
    fn index(&self, axis: usize) -> usize {
        self.position.get(axis).copied().unwrap_or(0)
    }

    #[inline]
    fn set_index(&mut self, axis: usize, index: usize) {
        debug_assert!(index < self.size(axis), "index {index} out of bounds for axis {axis} of \"{}\"", self.name);
        if let Some(p) = self.position.get_mut(axis)
        {
            *p = index;
        }
    }

    #[inline]
    fn value(&mut self) -> T {
        self.data[self.current_offset()]
    }
}

impl<T: Float> VoxelWriter for Volume<T>
{
    #[inline]
    fn set_value(&mut self, value: T) {
        let offset = self.current_offset();
        self.data[offset] = value;
    }
}
