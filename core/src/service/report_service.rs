use tracing::debug;

use crate::model::daily_series::DailySeries;
use crate::model::insight::{BudgetStatus, SpendingBands};
use crate::service::dto::{DayEntry, WeeklyReport};
use crate::time::{weekday_at, weekday_name};

pub struct ReportService {
    bands: SpendingBands,
}

impl ReportService {
    pub fn new(bands: SpendingBands) -> Self {
        Self { bands }
    }

    pub fn build(&self, series: &DailySeries, limit: f64) -> WeeklyReport {
        let total = series.total();
        let average = series.average();

        let days = series
            .values()
            .iter()
            .enumerate()
            .map(|(i, amount)| DayEntry {
                day: i + 1,
                weekday: weekday_at(i, series.len()).map(|d| weekday_name(d).to_string()),
                amount: *amount,
            })
            .collect();

        let budget = BudgetStatus::evaluate(total, limit);
        let spending_level = self.bands.classify(average);
        debug!(
            days = series.len(),
            total,
            average,
            limit,
            ?budget,
            ?spending_level,
            "built weekly report"
        );

        WeeklyReport {
            limit,
            total,
            average,
            max: series.max(),
            min: series.min(),
            days,
            budget,
            spending_level,
        }
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new(SpendingBands::default())
    }
}
