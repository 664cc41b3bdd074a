pub mod collect_week;
