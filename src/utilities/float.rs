use std::fmt::Debug;

///
/// Scalar sample type stored in a volume. Implemented for `f32` and `f64`.
///
pub trait Float : num_traits::Float + Debug + Default + Send + Sync {
    /// Arithmetic mean of two samples, used for even-sized windows.
    fn midpoint(a: Self, b: Self) -> Self;
}
impl Float for f64{
    fn midpoint(a: Self, b: Self) -> Self {
        (a + b) / 2.0
    }
}

impl Float for f32
{
    fn midpoint(a: Self, b: Self) -> Self {
        (a + b) / 2.0
    }
}

#[test]
fn check_midpoint()
{
    assert_eq!(<f64 as Float>::midpoint(1.0, 2.0), 1.5);
    assert_eq!(<f32 as Float>::midpoint(-3.0, 3.0), 0.0);
    assert_eq!(<f64 as Float>::midpoint(7.0, 7.0), 7.0);
}
