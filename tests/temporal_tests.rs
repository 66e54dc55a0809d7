#[cfg(test)]
mod tests {
    use chrono::{DateTime, Datelike, TimeZone, Utc, Weekday};
    use garnish::error::Error;
    use garnish::prelude::*;
    use garnish::temporal::clock;
    use test_log::test;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_daily_range_with_step() {
        let range = DateRange::new(date(2025, 9, 10), date(2025, 9, 15));
        let days: Vec<u32> = range.each_day(2).unwrap().map(|t| t.day()).collect();
        assert_eq!(days, vec![10, 12, 14]);
    }

    #[test]
    fn test_monthly_iteration_from_month_end() {
        let common = DateRange::new(date(2025, 1, 31), date(2025, 3, 31));
        assert_eq!(
            common.each_month(1).unwrap().collect::<Vec<_>>(),
            vec![date(2025, 1, 31), date(2025, 2, 28), date(2025, 3, 31)]
        );

        let leap = DateRange::new(date(2024, 1, 31), date(2024, 3, 31));
        assert_eq!(
            leap.each_month(1).unwrap().nth(1),
            Some(date(2024, 2, 29))
        );
    }

    #[test]
    fn test_range_never_passes_end() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 12, 31));
        assert!(range.each_quarter(1).unwrap().all(|t| range.includes(t)));
        assert_eq!(range.each_quarter(1).unwrap().count(), 4);
        assert_eq!(range.each_year(1).unwrap().count(), 1);
        assert_eq!(range.each_week(2).unwrap().count(), 27);
        assert_eq!(range.step_by(Granularity::Month, 5).unwrap().count(), 3);
    }

    #[test]
    fn test_zero_step() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 2, 1));
        assert!(matches!(range.each_month(0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_days_round_trip() {
        let t = Utc.with_ymd_and_hms(2025, 3, 30, 1, 30, 0).unwrap();
        let back = Duration::days(3).before(t).unwrap();
        assert_eq!(Duration::days(3).advance_from(back).unwrap(), t);
    }

    #[test]
    fn test_month_clamping_is_not_invertible() {
        let t = date(2025, 3, 31);
        let back = 1.month().before(t).unwrap();
        assert_eq!(back, date(2025, 2, 28));
        assert_eq!(1.month().since(back).unwrap(), date(2025, 3, 28));
    }

    #[test]
    fn test_advance_applies_months_before_days() {
        let t = date(2025, 1, 31);
        let d = 1.month() + 1.day();
        assert_eq!(t.advance(&d).unwrap(), date(2025, 3, 1));
    }

    #[test]
    fn test_week_start_from_config() {
        let config = Config::from_yaml_str("week_start: sunday").unwrap();
        let t = date(2025, 9, 10);
        let week = t.all_week_with(config.week_start);
        assert_eq!(week.start.weekday(), Weekday::Sun);
        assert_eq!(week.end.weekday(), Weekday::Sat);
        assert_eq!(t.all_week().start.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_clock_relatives() {
        assert!(clock::today().is_today());
        assert!(clock::yesterday().is_yesterday());
        assert!(clock::tomorrow().is_tomorrow());
        assert_eq!(clock::today().tomorrow(), clock::tomorrow());
        assert!(3.days().ago().unwrap() < clock::current());
    }

    #[test]
    fn test_change() {
        let t = date(2024, 2, 29);
        let moved = t
            .change(&Change {
                year: Some(2028),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(moved, date(2028, 2, 29));
        assert!(t
            .change(&Change {
                year: Some(2025),
                ..Default::default()
            })
            .is_err());
    }

    #[test]
    fn test_range_serde() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 1, 2));
        let json = serde_json::to_string(&range).unwrap();
        let parsed: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, range);
    }
}
