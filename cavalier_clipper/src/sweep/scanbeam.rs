use crate::{core::traits::Coord, local_minimum::LocalMinimum};

/// Multiset of sweep y values at which the active bounds may change.
///
/// Values are pushed unordered, [Scanbeam::pop_next] hands them back lowest first with
/// duplicates collapsed.
#[derive(Debug, Clone, Default)]
pub struct Scanbeam<T = i64> {
    values: Vec<T>,
    sorted: bool,
}

impl<T> Scanbeam<T>
where
    T: Coord,
{
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            sorted: true,
        }
    }

    /// Seed the scanbeam with the y of every local minimum.
    pub fn setup(minima: &[LocalMinimum<T>]) -> Self {
        let mut scanbeam = Self {
            values: Vec::with_capacity(minima.len()),
            sorted: false,
        };
        scanbeam.values.extend(minima.iter().map(|lm| lm.y));
        scanbeam
    }

    #[inline]
    pub fn push(&mut self, y: T) {
        self.values.push(y);
        self.sorted = false;
    }

    /// Remove and return the lowest y (all entries equal to it are removed).
    pub fn pop_next(&mut self) -> Option<T> {
        if !self.sorted {
            // descending so the lowest value sits at the back
            self.values.sort_unstable_by(|a, b| b.cmp(a));
            self.values.dedup();
            self.sorted = true;
        }
        self.values.pop()
    }

    #[inline]
    pub fn contains(&self, y: T) -> bool {
        self.values.contains(&y)
    }

    /// Number of entries, counting duplicates not yet collapsed by [Scanbeam::pop_next].
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_ascending_without_duplicates() {
        let mut sb = Scanbeam::new();
        for y in [5i32, 1, 3, 5, 1] {
            sb.push(y);
        }
        assert_eq!(sb.len(), 5);
        assert_eq!(sb.pop_next(), Some(1));
        sb.push(2);
        sb.push(3);
        assert_eq!(sb.pop_next(), Some(2));
        assert_eq!(sb.pop_next(), Some(3));
        assert_eq!(sb.pop_next(), Some(5));
        assert_eq!(sb.pop_next(), None);
        assert!(sb.is_empty());
    }
}
