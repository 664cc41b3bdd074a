use chrono::Weekday;

pub const DAYS_IN_WEEK: usize = 7;

/// Monday through Sunday, in order.
pub fn week_days() -> impl Iterator<Item = Weekday> {
    std::iter::successors(Some(Weekday::Mon), |day| Some(day.succ())).take(DAYS_IN_WEEK)
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Weekday for a 0-based position, only meaningful for a full week.
pub fn weekday_at(index: usize, series_len: usize) -> Option<Weekday> {
    if series_len != DAYS_IN_WEEK {
        return None;
    }
    week_days().nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_days_start_monday() {
        let names: Vec<&str> = week_days().map(weekday_name).collect();
        assert_eq!(
            names,
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
    }

    #[test]
    fn test_weekday_at() {
        assert_eq!(weekday_at(0, 7), Some(Weekday::Mon));
        assert_eq!(weekday_at(6, 7), Some(Weekday::Sun));
        assert_eq!(weekday_at(7, 7), None);
        // partial weeks have no weekday labels
        assert_eq!(weekday_at(0, 3), None);
    }
}
