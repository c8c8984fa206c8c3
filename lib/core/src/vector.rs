use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A sparse vector of non-negative term weights over a vocabulary
///
/// Entries are kept sorted by term index with no explicit zeros, so two
/// vectors built against the same vocabulary can be merged in one pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TermVector {
    dim: usize,
    entries: Vec<(usize, f32)>,
}

impl TermVector {
    /// All-zero vector of the given dimensionality
    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            entries: Vec::new(),
        }
    }

    /// Build from `(index, weight)` pairs.
    ///
    /// Pairs are sorted by index, duplicate indices are summed and zero or
    /// non-finite weights are dropped. Indices must be below `dim`.
    pub fn from_entries(dim: usize, mut entries: Vec<(usize, f32)>) -> Result<Self> {
        if let Some(&(index, _)) = entries.iter().find(|(index, _)| *index >= dim) {
            return Err(Error::DimensionMismatch {
                expected: dim,
                actual: index + 1,
            });
        }

        entries.sort_by_key(|(index, _)| *index);
        let mut merged: Vec<(usize, f32)> = Vec::with_capacity(entries.len());
        for (index, weight) in entries {
            match merged.last_mut() {
                Some((last, acc)) if *last == index => *acc += weight,
                _ => merged.push((index, weight)),
            }
        }
        merged.retain(|(_, weight)| weight.is_finite() && *weight > 0.0);

        Ok(Self { dim, entries: merged })
    }

    /// Build from entries whose indices are known to be unique and below `dim`
    pub(crate) fn from_unique_entries(dim: usize, mut entries: Vec<(usize, f32)>) -> Self {
        debug_assert!(entries.iter().all(|(index, _)| *index < dim));
        entries.sort_by_key(|(index, _)| *index);
        entries.retain(|(_, weight)| weight.is_finite() && *weight > 0.0);
        Self { dim, entries }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of non-zero entries
    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[(usize, f32)] {
        &self.entries
    }

    /// Weight at a term index, zero when absent
    pub fn get(&self, index: usize) -> f32 {
        self.entries
            .binary_search_by_key(&index, |(i, _)| *i)
            .map_or(0.0, |pos| self.entries[pos].1)
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
    }

    /// Sparse dot product. Fails when dimensionalities differ.
    pub fn dot(&self, other: &TermVector) -> Result<f32> {
        self.check_dim(other)?;

        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0f32;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        Ok(sum)
    }

    /// Cosine similarity in [0, 1]
    ///
    /// A zero vector on either side scores 0, never NaN.
    pub fn cosine_similarity(&self, other: &TermVector) -> Result<f32> {
        let dot_product = self.dot(other)?;

        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return Ok(0.0);
        }

        let similarity = dot_product / (norm_a * norm_b);
        if similarity.is_finite() {
            Ok(similarity.clamp(0.0, 1.0))
        } else {
            Ok(0.0)
        }
    }

    /// Normalize the vector to unit length. Zero vectors stay zero.
    #[inline]
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > f32::EPSILON {
            let inv_norm = 1.0 / norm;
            for (_, w) in &mut self.entries {
                *w *= inv_norm;
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut v = self.clone();
        v.normalize();
        v
    }

    fn check_dim(&self, other: &TermVector) -> Result<()> {
        if self.dim != other.dim {
            return Err(Error::DimensionMismatch {
                expected: self.dim,
                actual: other.dim,
            });
        }
        Ok(())
    }
}
