pub mod daily_series;
pub mod insight;
