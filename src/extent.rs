use std::{fmt::Display, ops::Range, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::VxError;

///
/// Full width of the filtering neighbourhood along each of the three spatial axes.
/// Every width is odd, so the window is symmetric around the centre voxel.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Extent
{
    full: [usize; 3],
    radius: [usize; 3],
}

impl Default for Extent
{
    fn default() -> Self {
        Self { full: [3; 3], radius: [1; 3] }
    }
}

impl Extent
{
    ///
    /// Accepts either one width (used for all three axes) or exactly three widths.
    /// Parity is checked before the element count, and the unclipped window
    /// must hold no more than `usize::MAX` voxels.
    ///
    pub fn new(extent: &[usize]) -> Result<Self, VxError>
    {
        if extent.iter().any(|&e| e & 1 == 0)
        {
            return Err(VxError::EvenExtent);
        }
        let full = match *extent
        {
            [e] => [e; 3],
            [x, y, z] => [x, y, z],
            _ => return Err(VxError::InvalidExtentCount),
        };
        full.iter().try_fold(1usize, |volume, &e| volume.checked_mul(e)).ok_or(VxError::ExtentTooLarge)?;
        Ok(Self { full, radius: full.map(|e| (e - 1) / 2) })
    }

    pub fn full(&self) -> [usize; 3]
    {
        self.full
    }

    pub fn radius(&self) -> [usize; 3]
    {
        self.radius
    }

    ///
    /// Number of voxels in an unclipped window.
    ///
    pub fn volume(&self) -> usize
    {
        self.full.iter().product()
    }

    ///
    /// Window along `axis` centred on `index`, clipped to `0..size`.
    ///
    #[inline]
    pub fn window(&self, axis: usize, index: usize, size: usize) -> Range<usize>
    {
        let radius = self.radius[axis];
        index.saturating_sub(radius)..index.saturating_add(radius).saturating_add(1).min(size)
    }
}

impl TryFrom<Vec<usize>> for Extent
{
    type Error = VxError;

    fn try_from(value: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Extent> for Vec<usize>
{
    fn from(value: Extent) -> Self {
        value.full.to_vec()
    }
}

impl FromStr for Extent
{
    type Err = VxError;

    ///
    /// Parses `"5"` or `"3,5,3"`.
    ///
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s.split(',')
            .map(|token| token.trim().parse::<usize>().map_err(|_| VxError::InvalidExtentSyntax))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&values)
    }
}

impl Display for Extent
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.full[0], self.full[1], self.full[2])
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn check_accepted_extents()
    {
        let extent = Extent::new(&[3, 3, 3]).unwrap();
        assert_eq!(extent, Extent::default());
        assert_eq!(extent.radius(), [1, 1, 1]);

        let extent = Extent::new(&[1]).unwrap();
        assert_eq!(extent.full(), [1, 1, 1]);
        assert_eq!(extent.radius(), [0, 0, 0]);
        assert_eq!(extent.volume(), 1);

        let extent = Extent::new(&[5, 1, 3]).unwrap();
        assert_eq!(extent.radius(), [2, 0, 1]);
        assert_eq!(extent.volume(), 15);
    }

    #[test]
    fn check_rejected_extents()
    {
        assert_eq!(Extent::new(&[4]), Err(VxError::EvenExtent));
        assert_eq!(Extent::new(&[0]), Err(VxError::EvenExtent));
        assert_eq!(Extent::new(&[3, 5]), Err(VxError::InvalidExtentCount));
        assert_eq!(Extent::new(&[2, 3]), Err(VxError::EvenExtent));
        assert_eq!(Extent::new(&[]), Err(VxError::InvalidExtentCount));
        assert_eq!(Extent::new(&[3, 3, 3, 3]), Err(VxError::InvalidExtentCount));
        assert_eq!(Extent::new(&[3, 6, 3]), Err(VxError::EvenExtent));
        // 4194305^3 does not fit in 64 bits
        assert_eq!(Extent::new(&[4_194_305]), Err(VxError::ExtentTooLarge));
        assert_eq!(Extent::new(&[usize::MAX, 3, 1]), Err(VxError::ExtentTooLarge));
        assert_eq!("4194305".parse::<Extent>(), Err(VxError::ExtentTooLarge));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn check_largest_extents()
    {
        let extent = Extent::new(&[usize::MAX, 1, 1]).unwrap();
        assert_eq!(extent.volume(), usize::MAX);
        assert_eq!(extent.window(0, 2, 5), 0..5);
        assert_eq!(extent.window(0, usize::MAX - 1, usize::MAX), 0..usize::MAX);

        let extent = Extent::new(&[2_642_245]).unwrap();
        assert_eq!(extent.volume(), 2_642_245usize.pow(3));
    }

    #[test]
    fn check_window_clipping()
    {
        let extent = Extent::new(&[5, 3, 1]).unwrap();
        assert_eq!(extent.window(0, 0, 10), 0..3);
        assert_eq!(extent.window(0, 1, 10), 0..4);
        assert_eq!(extent.window(0, 5, 10), 3..8);
        assert_eq!(extent.window(0, 9, 10), 7..10);
        assert_eq!(extent.window(1, 0, 1), 0..1);
        assert_eq!(extent.window(2, 4, 6), 4..5);
        // radius larger than the axis
        let extent = Extent::new(&[9]).unwrap();
        assert_eq!(extent.window(0, 1, 3), 0..3);
    }

    #[test]
    fn check_window_length_near_edges()
    {
        let extent = Extent::new(&[7]).unwrap();
        let size = 10;
        for index in 0..size
        {
            let window = extent.window(0, index, size);
            let expected = (index + 3).min(size - 1) - index.saturating_sub(3) + 1;
            assert_eq!(window.len(), expected);
            if index < 3 || index + 3 >= size
            {
                assert!(window.len() < 7);
            }
        }
    }

    #[test]
    fn check_parse()
    {
        assert_eq!("3".parse::<Extent>(), Ok(Extent::default()));
        assert_eq!("5, 3,1".parse::<Extent>().map(|e| e.full()), Ok([5, 3, 1]));
        assert_eq!("3,4,3".parse::<Extent>(), Err(VxError::EvenExtent));
        assert_eq!("3,5".parse::<Extent>(), Err(VxError::InvalidExtentCount));
        assert_eq!("3,x,3".parse::<Extent>(), Err(VxError::InvalidExtentSyntax));
        assert_eq!("".parse::<Extent>(), Err(VxError::InvalidExtentSyntax));
        assert_eq!(Extent::new(&[5, 3, 1]).unwrap().to_string(), "5x3x1");
    }

    #[test]
    fn check_serde_validates()
    {
        let bytes = crate::serialization::serialize(&vec![3usize, 5, 3], crate::serialization::SerializationFormat::Bincode).unwrap();
        let extent: Extent = crate::serialization::deserialize(&bytes, crate::serialization::SerializationFormat::Bincode).unwrap();
        assert_eq!(extent.full(), [3, 5, 3]);

        let bytes = crate::serialization::serialize(&vec![2usize], crate::serialization::SerializationFormat::Bincode).unwrap();
        assert!(crate::serialization::deserialize::<Extent>(&bytes, crate::serialization::SerializationFormat::Bincode).is_err());
    }
}
