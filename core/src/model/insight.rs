use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::money::format_amount;

pub const DEFAULT_HIGH_AVERAGE: f64 = 50.0;
pub const DEFAULT_MODERATE_AVERAGE: f64 = 25.0;

/// How the week's total compares to the spending limit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BudgetStatus {
    Within { remaining: f64 },
    Exceeded { over: f64 },
}

impl BudgetStatus {
    /// Spending exactly the limit still counts as within budget.
    pub fn evaluate(total: f64, limit: f64) -> Self {
        if total <= limit {
            BudgetStatus::Within {
                remaining: limit - total,
            }
        } else {
            BudgetStatus::Exceeded {
                over: total - limit,
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            BudgetStatus::Within { remaining } => format!(
                "Great job! You stayed within your budget and have ${} remaining.",
                format_amount(*remaining)
            ),
            BudgetStatus::Exceeded { over } => format!(
                "You exceeded your budget by ${}. Try to reduce spending next week.",
                format_amount(*over)
            ),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpendingLevel {
    High,
    Moderate,
    Low,
}

impl SpendingLevel {
    pub fn message(&self) -> &'static str {
        match self {
            SpendingLevel::High => "Warning: Your daily spending is quite high.",
            SpendingLevel::Moderate => "You're spending moderately. Keep an eye on it.",
            SpendingLevel::Low => "Nice control! Your daily spending is low.",
        }
    }
}

/// Daily-average thresholds. Both bounds are exclusive from below:
/// an average equal to `high` is still moderate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SpendingBands {
    pub high: f64,
    pub moderate: f64,
}

impl Default for SpendingBands {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_AVERAGE,
            moderate: DEFAULT_MODERATE_AVERAGE,
        }
    }
}

impl SpendingBands {
    pub fn new(high: f64, moderate: f64) -> Result<Self> {
        if !high.is_finite() || !moderate.is_finite() {
            return Err(anyhow!("Spending thresholds must be finite numbers"));
        }
        if moderate > high {
            return Err(anyhow!(
                "Moderate threshold ({}) cannot exceed high threshold ({})",
                moderate,
                high
            ));
        }
        Ok(Self { high, moderate })
    }

    pub fn classify(&self, average: f64) -> SpendingLevel {
        if average > self.high {
            SpendingLevel::High
        } else if average > self.moderate {
            SpendingLevel::Moderate
        } else {
            SpendingLevel::Low
        }
    }
}
