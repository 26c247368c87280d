///
/// Walks every position of an N-dimensional shape exactly once, axis 0 fastest.
///
#[derive(Clone, Debug)]
pub struct PositionIterator
{
    shape: Vec<usize>,
    next: Option<Vec<usize>>,
}

impl PositionIterator
{
    pub fn new(shape: &[usize]) -> Self
    {
        let next = if shape.contains(&0) { None } else { Some(vec![0; shape.len()]) };
        Self { shape: shape.to_vec(), next }
    }

    fn step(&self, position: &[usize]) -> Option<Vec<usize>>
    {
        let mut next = position.to_vec();
        for (index, &size) in next.iter_mut().zip(&self.shape)
        {
            *index += 1;
            if *index < size
            {
                return Some(next);
            }
            *index = 0;
        }
        None
    }
}

impl Iterator for PositionIterator
{
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.step(&current);
        Some(current)
    }
}

#[test]
fn check_visits_every_position_once()
{
    let positions: Vec<Vec<usize>> = PositionIterator::new(&[2, 3, 1, 2]).collect();
    assert_eq!(positions.len(), 12);
    assert_eq!(positions[0], vec![0, 0, 0, 0]);
    assert_eq!(positions[1], vec![1, 0, 0, 0]);
    assert_eq!(positions[2], vec![0, 1, 0, 0]);
    assert_eq!(positions[11], vec![1, 2, 0, 1]);
    let unique: std::collections::HashSet<_> = positions.iter().cloned().collect();
    assert_eq!(unique.len(), 12);
}

#[test]
fn check_degenerate_shapes()
{
    assert_eq!(PositionIterator::new(&[4, 0, 2]).count(), 0);
    assert_eq!(PositionIterator::new(&[1, 1, 1]).collect::<Vec<_>>(), vec![vec![0, 0, 0]]);
}
