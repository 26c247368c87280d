use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum VxError
{
    EvenExtent,
    InvalidExtentCount,
    InvalidExtentSyntax,
    ExtentTooLarge,
    ShapeMismatch,
    LZ4DecompressionFailed,
    ReadBufferFailed,
    WriteBufferFailed,
    SerializationFailed,
    DeserializationFailed,
    FileIOError,
}
impl std::error::Error for VxError {}

impl Display for VxError
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self
        {
            VxError::EvenExtent => write!(f, "expected odd number for extent"),
            VxError::InvalidExtentCount => write!(f, "unexpected number of elements specified in extent"),
            VxError::ExtentTooLarge => write!(f, "extent describes more voxels than can be addressed"),
            VxError::InvalidExtentSyntax => write!(f, "extent must be a comma-separated list of integers"),
            _ => write!(f, "{:?}", *self),
        }
    }
}
