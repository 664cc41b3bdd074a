use serde::{Deserialize, Serialize};

use crate::model::insight::{BudgetStatus, SpendingLevel};
use crate::money::format_amount;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub day: usize, // 1-based
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub weekday: Option<String>, // Monday, Tuesday... only for a full week
    pub amount: f64,
}

impl DayEntry {
    /// Same `Day N: $value` line as `DailySeries::render`.
    pub fn render_line(&self) -> String {
        format!("Day {}: ${}", self.day, format_amount(self.amount))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeeklyReport {
    pub limit: f64,
    pub total: f64,
    pub average: f64,
    pub max: f64,
    pub min: f64,
    pub days: Vec<DayEntry>,
    pub budget: BudgetStatus,
    pub spending_level: SpendingLevel,
}

impl WeeklyReport {
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Total Spent:   ${}", format_amount(self.total)),
            format!("Daily Average: ${}", format_amount(self.average)),
            format!("Highest Day:   ${}", format_amount(self.max)),
            format!("Lowest Day:    ${}", format_amount(self.min)),
        ]
    }

    pub fn insight_lines(&self) -> Vec<String> {
        vec![
            self.budget.message(),
            self.spending_level.message().to_string(),
        ]
    }

    /// Full plain-text report: summary, daily breakdown, insights.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str("===== Weekly Spending Summary =====\n");
        for line in self.summary_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');

        out.push_str("===== Daily Breakdown =====\n");
        for entry in &self.days {
            out.push_str(&entry.render_line());
            out.push('\n');
        }
        out.push('\n');

        out.push_str("===== Insights =====\n");
        for line in self.insight_lines() {
            out.push_str(&line);
            out.push('\n');
        }

        out
    }
}
