//! Property tests for the overtime rules and the payroll engine.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::{
    DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_WEEKLY_REGULAR_LIMIT, calculate_gross_pay,
    reconcile_overtime, run_payroll, split_daily_overtime, split_weekly_overtime,
};
use payroll_engine::error::EngineError;
use payroll_engine::models::{Employee, TimeEntry, Timesheet};

/// Hours in quarter-hour steps from 0 to 24.
fn day_hours() -> impl Strategy<Value = Decimal> {
    (0i64..=96).prop_map(|quarters| Decimal::new(quarters * 25, 2))
}

/// Positive limits in hundredths, up to 60 hours.
fn limit() -> impl Strategy<Value = Decimal> {
    (1i64..=6000).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

fn rate() -> impl Strategy<Value = Decimal> {
    (1i64..=20000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Between `min_percent`% and 100% of `Decimal::MAX`.
fn near_max(min_percent: u32) -> impl Strategy<Value = Decimal> {
    (min_percent..=100).prop_map(|percent| Decimal::MAX / Decimal::from(100) * Decimal::from(percent))
}

fn timesheet(rate: Decimal, hours: &[Decimal]) -> Timesheet {
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    Timesheet::new(
        Employee::new("E001", rate),
        hours
            .iter()
            .enumerate()
            .map(|(i, h)| TimeEntry::new(start + Days::new(i as u64), *h))
            .collect(),
    )
}

proptest! {
    #[test]
    fn daily_split_conserves_hours(hours in day_hours(), limit in limit()) {
        let day = split_daily_overtime(hours, limit).unwrap();

        prop_assert_eq!(day.regular_hours + day.overtime_hours, hours);
        prop_assert!(day.regular_hours >= Decimal::ZERO);
        prop_assert!(day.regular_hours <= limit);
        prop_assert!(day.overtime_hours >= Decimal::ZERO);
    }

    #[test]
    fn weekly_split_conserves_hours(total in (0i64..=20000).prop_map(|h| Decimal::new(h, 2)), limit in limit()) {
        let week = split_weekly_overtime(total, limit).unwrap();

        prop_assert_eq!(week.regular_hours + week.overtime_hours, total);
        prop_assert!(week.regular_hours >= Decimal::ZERO);
        prop_assert!(week.regular_hours <= limit);
    }

    #[test]
    fn engine_conserves_hours(rate in rate(), hours in prop::collection::vec(day_hours(), 0..31)) {
        let ts = timesheet(rate, &hours);
        let result = run_payroll(&ts).unwrap();

        prop_assert_eq!(result.regular_hours + result.overtime_hours, ts.total_hours().unwrap());
        prop_assert!(result.regular_hours >= Decimal::ZERO);
        prop_assert!(result.regular_hours <= DEFAULT_WEEKLY_REGULAR_LIMIT);
    }

    #[test]
    fn engine_is_deterministic(rate in rate(), hours in prop::collection::vec(day_hours(), 0..14)) {
        let ts = timesheet(rate, &hours);
        prop_assert_eq!(run_payroll(&ts).unwrap(), run_payroll(&ts).unwrap());
    }

    #[test]
    fn gross_pay_matches_formula(rate in rate(), hours in prop::collection::vec(day_hours(), 1..10)) {
        let result = run_payroll(&timesheet(rate, &hours)).unwrap();
        let expected = result.regular_hours * rate
            + result.overtime_hours * rate * DEFAULT_OVERTIME_MULTIPLIER;

        prop_assert_eq!(result.gross_pay, expected);
    }

    #[test]
    fn reconciliation_never_loses_daily_overtime(
        daily_regular in (0i64..=10000).prop_map(|h| Decimal::new(h, 2)),
        daily_overtime in (0i64..=10000).prop_map(|h| Decimal::new(h, 2)),
    ) {
        let total = daily_regular + daily_overtime;
        let week = split_weekly_overtime(total, DEFAULT_WEEKLY_REGULAR_LIMIT).unwrap();
        let hours = reconcile_overtime(daily_overtime, &week);

        prop_assert_eq!(hours.regular_hours + hours.overtime_hours, total);
        prop_assert!(hours.overtime_hours >= daily_overtime);
        prop_assert!(hours.overtime_hours >= week.overtime_hours);
    }

    #[test]
    fn extreme_rates_never_panic(rate in near_max(1), hours in prop::collection::vec(day_hours(), 0..10)) {
        let result = run_payroll(&timesheet(rate, &hours));
        let handled = matches!(result, Ok(_) | Err(EngineError::CalculationOverflow { .. }));
        prop_assert!(handled);
    }

    #[test]
    fn extreme_rates_with_real_hours_overflow(
        rate in near_max(21),
        hours in prop::collection::vec(day_hours(), 0..10),
    ) {
        // At least 10 hours at over a fifth of the range cannot fit.
        let mut hours = hours;
        hours.push(Decimal::from(10));
        let result = run_payroll(&timesheet(rate, &hours));
        let overflowed = matches!(result, Err(EngineError::CalculationOverflow { .. }));
        prop_assert!(overflowed);
    }

    #[test]
    fn extreme_hours_overflow(
        first in near_max(51),
        second in near_max(51),
        rate in rate(),
    ) {
        let result = run_payroll(&timesheet(rate, &[first, second]));
        let overflowed = matches!(result, Err(EngineError::CalculationOverflow { .. }));
        prop_assert!(overflowed);
    }

    #[test]
    fn any_negative_entry_is_rejected(
        hours in prop::collection::vec(day_hours(), 0..10),
        negative in (1i64..=2400).prop_map(|h| Decimal::new(-h, 2)),
        position in any::<prop::sample::Index>(),
    ) {
        let mut hours = hours;
        let at = position.index(hours.len() + 1);
        hours.insert(at, negative);

        let result = run_payroll(&timesheet(Decimal::from(20), &hours));
        let rejected = matches!(result, Err(EngineError::InvalidTimeEntry { .. }));
        prop_assert!(rejected);
    }

    #[test]
    fn negative_inputs_rejected_by_rules(negative in (1i64..=2400).prop_map(|h| Decimal::new(-h, 2))) {
        let daily = split_daily_overtime(negative, Decimal::from(8));
        let weekly = split_weekly_overtime(negative, Decimal::from(44));
        let pay = calculate_gross_pay(negative, Decimal::ZERO, Decimal::from(20), DEFAULT_OVERTIME_MULTIPLIER);

        prop_assert!(matches!(daily, Err(EngineError::InvalidInput { .. })), "unexpected result");
        prop_assert!(matches!(weekly, Err(EngineError::InvalidInput { .. })), "unexpected result");
        prop_assert!(matches!(pay, Err(EngineError::InvalidHours { .. })), "unexpected result");
    }
}
