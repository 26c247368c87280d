/// Serialization format options for volume data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SerializationFormat {
    /// bincode format - compact binary
    Bincode,
    /// bincode format with LZ4 compression
    #[default]
    BincodeLz4,
}

impl SerializationFormat {
    /// Returns true if this format uses LZ4 compression
    pub fn is_compressed(&self) -> bool {
        matches!(self, SerializationFormat::BincodeLz4)
    }
}

use crate::errors::VxError;
use serde::{de::DeserializeOwned, Serialize};

/// Serialize data to bytes using the specified format.
/// Applies LZ4 compression if the format variant ends with Lz4.
pub fn serialize<T: Serialize>(data: &T, format: SerializationFormat) -> Result<Vec<u8>, VxError> {
    let bytes = bincode::serde::encode_to_vec(data, bincode::config::standard())
        .map_err(|_| VxError::SerializationFailed)?;
    if format.is_compressed() {
        Ok(lz4_flex::compress_prepend_size(&bytes))
    } else {
        Ok(bytes)
    }
}

/// Deserialize data from bytes using the specified format.
/// Applies LZ4 decompression if the format variant ends with Lz4.
pub fn deserialize<T: DeserializeOwned>(data: &[u8], format: SerializationFormat) -> Result<T, VxError> {
    let decode = |bytes: &[u8]| {
        bincode::serde::decode_from_slice(bytes, bincode::config::standard())
            .map(|(value, _)| value)
            .map_err(|_| VxError::DeserializationFailed)
    };
    if format.is_compressed() {
        let decompressed = lz4_flex::decompress_size_prepended(data)
            .map_err(|_| VxError::LZ4DecompressionFailed)?;
        decode(&decompressed)
    } else {
        decode(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{accessor::VoxelAccessor, volume::Volume};

    fn sample_volume() -> Volume<f32> {
        Volume::from_data("sample", &[2, 2, 3], (0..12).map(|i| i as f32 * 0.5).collect()).unwrap()
    }

    #[test]
    fn test_bincode_volume() {
        let volume = sample_volume();
        let bytes = volume.write_buffer(SerializationFormat::Bincode).unwrap();
        let result = Volume::<f32>::read_buffer(&bytes, SerializationFormat::Bincode).unwrap();
        assert_eq!(result.data(), volume.data());
        assert_eq!(result.shape(), vec![2, 2, 3]);
        assert_eq!(result.name(), "sample");
    }

    #[test]
    fn test_bincode_lz4_volume() {
        let volume = Volume::<f64>::filled("constant", &[16, 16, 16], 7.0).unwrap();
        let compressed = volume.write_buffer(SerializationFormat::BincodeLz4).unwrap();
        let raw = volume.write_buffer(SerializationFormat::Bincode).unwrap();
        assert!(compressed.len() < raw.len());
        let result = Volume::<f64>::read_buffer(&compressed, SerializationFormat::BincodeLz4).unwrap();
        assert!(result.data().iter().all(|&v| v == 7.0));
    }

    #[test]
    fn test_corrupt_buffers_are_rejected() {
        let bytes = sample_volume().write_buffer(SerializationFormat::Bincode).unwrap();
        assert_eq!(
            Volume::<f32>::read_buffer(&bytes[..bytes.len() / 2], SerializationFormat::Bincode).unwrap_err(),
            VxError::DeserializationFailed
        );
        assert_eq!(
            Volume::<f32>::read_buffer(&[1, 2, 3], SerializationFormat::BincodeLz4).unwrap_err(),
            VxError::LZ4DecompressionFailed
        );
    }

    #[test]
    fn test_inconsistent_volume_is_rejected() {
        // same field layout as `Volume`: name, shape, strides, data, position
        let short_data = ("bad", vec![2usize, 2], vec![1usize, 2], vec![1.0f32; 3], vec![0usize, 0]);
        let outside = ("bad", vec![2usize, 2], vec![1usize, 2], vec![1.0f32; 4], vec![0usize, 5]);
        let wrong_strides = ("bad", vec![2usize, 2], vec![1usize, 1], vec![1.0f32; 4], vec![0usize, 0]);
        let overflowing = ("bad", vec![usize::MAX, 3], vec![1usize, usize::MAX], vec![1.0f32; 4], vec![0usize, 0]);
        let consistent = ("good", vec![2usize, 2], vec![1usize, 2], vec![1.0f32; 4], vec![1usize, 1]);
        for format in [SerializationFormat::Bincode, SerializationFormat::BincodeLz4] {
            for fields in [&short_data, &outside, &wrong_strides, &overflowing] {
                let bytes = serialize(fields, format).unwrap();
                assert_eq!(deserialize::<Volume<f32>>(&bytes, format).unwrap_err(), VxError::DeserializationFailed);
            }
            let bytes = serialize(&consistent, format).unwrap();
            let mut volume = deserialize::<Volume<f32>>(&bytes, format).unwrap();
            assert_eq!(volume.position(), vec![1, 1]);
            assert_eq!(volume.value(), 1.0);
        }
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("vxmedian_volume_{}.bin", std::process::id()));
        let path = path.to_str().unwrap();
        let volume = sample_volume();
        volume.write(path, SerializationFormat::default()).unwrap();
        let result = Volume::<f32>::read(std::fs::File::open(path).unwrap(), SerializationFormat::default()).unwrap();
        std::fs::remove_file(path).unwrap();
        assert_eq!(result.data(), volume.data());
    }
}
