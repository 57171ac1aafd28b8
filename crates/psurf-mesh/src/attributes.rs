//! Per-vertex attribute arrays that may also hold a single broadcast value.

use psurf_core::{PsurfError, Result};

/// An opacity assignment: one value for every vertex, or one per vertex.
#[derive(Debug, Clone, PartialEq)]
pub enum Opacity {
    Uniform(f64),
    PerVertex(Vec<f64>),
}

impl Opacity {
    /// The values to store for a surface with `vertex_count` vertices.
    pub fn resolve(&self, vertex_count: usize) -> Result<Vec<f64>> {
        match self {
            Opacity::Uniform(value) => Ok(vec![*value]),
            Opacity::PerVertex(values) => {
                check_attribute_len(values.len(), vertex_count)?;
                Ok(values.clone())
            }
        }
    }
}

impl From<f64> for Opacity {
    fn from(value: f64) -> Self {
        Opacity::Uniform(value)
    }
}

impl From<Vec<f64>> for Opacity {
    fn from(values: Vec<f64>) -> Self {
        Opacity::PerVertex(values)
    }
}

/// Attribute arrays hold either one broadcast entry or one entry per vertex.
pub fn check_attribute_len(len: usize, vertex_count: usize) -> Result<()> {
    if len == 1 || len == vertex_count {
        Ok(())
    } else {
        Err(PsurfError::ShapeMismatch {
            expected: vertex_count,
            actual: len,
        })
    }
}

/// Value of a broadcast-or-per-vertex attribute at vertex `index`.
pub fn attribute_at<T: Copy>(values: &[T], index: usize) -> Option<T> {
    match values {
        [single] => Some(*single),
        _ => values.get(index).copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_opacity_broadcasts() {
        assert_eq!(Opacity::from(0.5).resolve(9).unwrap(), vec![0.5]);
    }

    #[test]
    fn test_per_vertex_opacity_length_checked() {
        let ok = Opacity::from(vec![0.1, 0.2, 0.3]);
        assert_eq!(ok.resolve(3).unwrap(), vec![0.1, 0.2, 0.3]);
        assert!(matches!(
            ok.resolve(4),
            Err(PsurfError::ShapeMismatch { expected: 4, actual: 3 })
        ));
    }

    #[test]
    fn test_attribute_at() {
        assert_eq!(attribute_at(&[7], 5), Some(7));
        assert_eq!(attribute_at(&[1, 2, 3], 2), Some(3));
        assert_eq!(attribute_at(&[1, 2, 3], 3), None);
        assert_eq!(attribute_at::<i32>(&[], 0), None);
    }
}
