use std::fmt;

use crate::money::format_amount;

/// One measurement per day, in day order.
///
/// The series owns its own copy of the values it was built from and never
/// changes afterwards. Every statistic falls back to `0.0` on an empty series
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailySeries {
    values: Vec<f64>,
}

impl DailySeries {
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    /// An absent sequence is treated as an empty series.
    pub fn from_option(values: Option<&[f64]>) -> Self {
        values.map(Self::new).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn total(&self) -> f64 {
        // fold from +0.0: `Sum` on an empty f64 iterator yields -0.0
        self.values.iter().fold(0.0, |acc, v| acc + v)
    }

    pub fn average(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.total() / self.values.len() as f64
    }

    /// Largest value, or `0.0` for an empty series.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().reduce(f64::max).unwrap_or(0.0)
    }

    /// Smallest value, or `0.0` for an empty series.
    pub fn min(&self) -> f64 {
        self.values.iter().copied().reduce(f64::min).unwrap_or(0.0)
    }

    /// `Day N: $value` per element, newline separated.
    pub fn render(&self) -> String {
        self.values
            .iter()
            .enumerate()
            .map(|(i, value)| format!("Day {}: ${}", i + 1, format_amount(*value)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Vec<f64>> for DailySeries {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl fmt::Display for DailySeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
