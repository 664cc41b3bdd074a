pub mod model;
pub mod input;
pub mod money;
pub mod time;
pub mod service;
pub mod usecase;

pub use model::daily_series::DailySeries;
pub use model::insight::{BudgetStatus, SpendingBands, SpendingLevel};
pub use input::{parse_amount, AmountError};
pub use money::format_amount;
pub use service::dto::{DayEntry, WeeklyReport};
pub use service::report_service::ReportService;
pub use usecase::collect_week::{CollectedWeek, WeekCollector};
