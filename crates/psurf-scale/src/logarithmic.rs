use psurf_core::{PsurfError, Result};
use serde::{Deserialize, Serialize};

use crate::{ScaleFunction, ScaleLabel};

/// `f(x) = base^x`, for logarithmic axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogBase {
    pub base: f64,
    pub custom_labels: bool,
}

impl LogBase {
    pub fn new(base: f64) -> Self {
        Self {
            base,
            custom_labels: true,
        }
    }

    pub fn with_custom_labels(self, custom_labels: bool) -> Self {
        Self {
            custom_labels,
            ..self
        }
    }

    /// Labels of the form `base^{log_base(value)}`, with the exponent printed
    /// to `decimal_places` digits.
    pub fn labels_with_precision(
        &self,
        values: &[f64],
        decimal_places: usize,
    ) -> Result<Vec<ScaleLabel>> {
        values
            .iter()
            .map(|&value| {
                let exponent = self.inverse_function(value)?;
                Ok(ScaleLabel {
                    base: self.base,
                    exponent: format!("{exponent:.decimal_places$}"),
                })
            })
            .collect()
    }
}

impl Default for LogBase {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl ScaleFunction for LogBase {
    fn function(&self, value: f64) -> f64 {
        self.base.powf(value)
    }

    fn inverse_function(&self, value: f64) -> Result<f64> {
        if value <= 0.0 {
            return Err(PsurfError::Domain(format!(
                "log({value}) is undefined; the value must be positive"
            )));
        }
        Ok(value.log(self.base))
    }

    fn custom_labels(&self) -> bool {
        self.custom_labels
    }

    fn get_custom_labels(&self, values: &[f64]) -> Result<Vec<ScaleLabel>> {
        self.labels_with_precision(values, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_log_roundtrip() {
        let scale = LogBase::new(10.0);
        assert_relative_eq!(scale.function(3.0), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(
            scale.inverse_function(scale.function(3.0)).unwrap(),
            3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_log_inverse_domain() {
        let scale = LogBase::default();
        assert!(matches!(scale.inverse_function(0.0), Err(PsurfError::Domain(_))));
        assert!(matches!(scale.inverse_function(-4.0), Err(PsurfError::Domain(_))));
    }

    #[test]
    fn test_base_two() {
        let scale = LogBase::new(2.0);
        assert_relative_eq!(scale.function(5.0), 32.0);
        assert_relative_eq!(scale.inverse_function(0.125).unwrap(), -3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_custom_labels() {
        let scale = LogBase::default();
        assert!(scale.custom_labels());
        let labels = scale.get_custom_labels(&[1.0, 10.0, 100.0]).unwrap();
        let text: Vec<String> = labels.iter().map(ToString::to_string).collect();
        assert_eq!(text, vec!["10^{0}", "10^{1}", "10^{2}"]);
    }

    #[test]
    fn test_labels_with_precision() {
        let scale = LogBase::new(10.0);
        let labels = scale.labels_with_precision(&[1000.0, 10f64.powf(0.5)], 2).unwrap();
        assert_eq!(labels[0].exponent, "3.00");
        assert_eq!(labels[1].exponent, "0.50");
    }

    #[test]
    fn test_labels_fail_on_nonpositive_tick() {
        let scale = LogBase::new(10.0);
        assert!(matches!(
            scale.get_custom_labels(&[10.0, 0.0]),
            Err(PsurfError::Domain(_))
        ));
    }

    #[test]
    fn test_deserialize_defaults() {
        let scale: LogBase = serde_json::from_str(r#"{ "base": 2.0 }"#).unwrap();
        assert_eq!(scale.base, 2.0);
        assert!(scale.custom_labels);
    }
}
