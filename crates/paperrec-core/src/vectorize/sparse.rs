use serde::Serialize;

/// Sparse vector of `(feature, weight)` pairs, sorted by feature index
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from pairs in any order; zero weights are dropped.
    pub fn from_pairs(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(_, w)| w != 0.0);
        entries.sort_by_key(|&(feature, _)| feature);
        SparseVector { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Number of non-zero features
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product by merging the two sorted entry lists
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (fa, wa) = self.entries[i];
            let (fb, wb) = other.entries[j];
            match fa.cmp(&fb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Scale to unit L2 norm; zero vectors are left alone.
    pub fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_sorts_and_drops_zeros() {
        let v = SparseVector::from_pairs(vec![(3, 1.0), (0, 2.0), (1, 0.0)]);
        assert_eq!(v.entries(), &[(0, 2.0), (3, 1.0)]);
        assert_eq!(v.nnz(), 2);
    }

    #[test]
    fn test_dot_and_norm() {
        let a = SparseVector::from_pairs(vec![(0, 1.0), (2, 2.0)]);
        let b = SparseVector::from_pairs(vec![(2, 3.0), (5, 4.0)]);
        assert_eq!(a.dot(&b), 6.0);
        assert!((b.norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized() {
        let v = SparseVector::from_pairs(vec![(1, 3.0), (4, 4.0)]).normalized();
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!(SparseVector::default().normalized().is_zero());
    }
}
