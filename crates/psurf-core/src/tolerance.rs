use serde::{Deserialize, Serialize};

/// Numeric thresholds for surface computations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Cross-product length below which a finite-difference normal is degenerate
    pub degenerate: f64,
}

impl Tolerance {
    pub const DEFAULT_DEGENERATE: f64 = 1e-12;

    pub fn new(degenerate: f64) -> Self {
        Self { degenerate }
    }

    /// Whether a cross-product length is too small (or not a number) to normalize.
    pub fn is_degenerate(self, length: f64) -> bool {
        !(length >= self.degenerate)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEGENERATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_threshold() {
        let tol = Tolerance::default();
        assert!(tol.is_degenerate(0.0));
        assert!(tol.is_degenerate(1e-14));
        assert!(tol.is_degenerate(f64::NAN));
        assert!(!tol.is_degenerate(1.0));
    }

    #[test]
    fn test_custom_threshold() {
        let tol = Tolerance::new(1e-3);
        assert!(tol.is_degenerate(5e-4));
        assert!(!tol.is_degenerate(2e-3));
    }

    #[test]
    fn test_json_fills_defaults() {
        let tol: Tolerance = serde_json::from_str("{}").unwrap();
        assert_eq!(tol, Tolerance::default());
        let tol: Tolerance = serde_json::from_str(r#"{ "degenerate": 1e-6 }"#).unwrap();
        assert_eq!(tol.degenerate, 1e-6);
    }
}
