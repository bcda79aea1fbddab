//! Property tests for the salary calculator and intake parsing.

use proptest::option;
use proptest::prelude::*;
use rust_decimal::Decimal;

use salary_report::api::parse_overtime_hours;
use salary_report::calculation::{
    DEFAULT_OVERTIME_HOURLY_RATE, calculate_gross_salary, calculate_hra, calculate_overtime,
    calculate_salary_breakdown,
};
use salary_report::models::{Designation, Employee};

fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn percent() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

fn designation() -> impl Strategy<Value = Designation> {
    (
        option::of(amount()),
        option::of(percent()),
        option::of(percent()),
        option::of(percent()),
        option::of(amount()),
    )
        .prop_map(|(basic_salary, hra_percent, da_percent, ta_percent, bonus)| Designation {
            id: 1,
            name: Some("Grade".to_string()),
            basic_salary,
            hra_percent,
            da_percent,
            ta_percent,
            bonus,
        })
}

fn employee(designation: Option<Designation>, overtime_hours: u32) -> Employee {
    Employee {
        id: 1,
        name: Some("Asha".to_string()),
        contact: None,
        overtime_hours,
        designation,
    }
}

proptest! {
    #[test]
    fn gross_matches_formula(
        basic in amount(),
        hra in percent(),
        da in percent(),
        ta in percent(),
        bonus in amount(),
        hours in 0u32..1_000,
    ) {
        let designation = Designation {
            id: 1,
            name: None,
            basic_salary: Some(basic),
            hra_percent: Some(hra),
            da_percent: Some(da),
            ta_percent: Some(ta),
            bonus: Some(bonus),
        };
        let hundred = Decimal::ONE_HUNDRED;
        let expected = basic
            + hra / hundred * basic
            + da / hundred * basic
            + ta / hundred * basic
            + bonus
            + Decimal::from(hours) * hundred;

        let gross = calculate_gross_salary(
            &employee(Some(designation), hours),
            DEFAULT_OVERTIME_HOURLY_RATE,
        );
        prop_assert_eq!(gross, expected);
    }

    #[test]
    fn unlinked_employee_earns_nothing(hours in any::<u32>()) {
        let breakdown = calculate_salary_breakdown(
            &employee(None, hours),
            DEFAULT_OVERTIME_HOURLY_RATE,
        );

        prop_assert_eq!(breakdown.gross_salary, Decimal::ZERO);
        prop_assert_eq!(breakdown.hra, Decimal::ZERO);
        prop_assert_eq!(breakdown.da, Decimal::ZERO);
        prop_assert_eq!(breakdown.ta, Decimal::ZERO);
    }

    #[test]
    fn null_hra_percent_gives_zero_hra(designation in designation()) {
        let designation = Designation { hra_percent: None, ..designation };
        prop_assert_eq!(calculate_hra(&employee(Some(designation), 0)), Decimal::ZERO);
    }

    #[test]
    fn breakdown_components_sum_to_gross(designation in designation(), hours in 0u32..10_000) {
        let breakdown = calculate_salary_breakdown(
            &employee(Some(designation), hours),
            DEFAULT_OVERTIME_HOURLY_RATE,
        );

        prop_assert_eq!(
            breakdown.gross_salary,
            breakdown.basic_salary
                + breakdown.allowances_total()
                + breakdown.bonus
                + breakdown.overtime
        );
        prop_assert!(breakdown.gross_salary >= Decimal::ZERO);
    }

    #[test]
    fn overtime_scales_with_rate(hours in 0u32..10_000, rate in amount()) {
        let overtime = calculate_overtime(&employee(None, hours), rate);
        prop_assert_eq!(overtime, Decimal::from(hours) * rate);
    }

    #[test]
    fn digit_strings_parse_exactly(hours in any::<u32>()) {
        prop_assert_eq!(parse_overtime_hours(Some(&hours.to_string())), hours);
    }

    #[test]
    fn strings_with_non_digits_parse_to_zero(text in "[0-9]{0,4}[^0-9][0-9a-z ]{0,4}") {
        prop_assert_eq!(parse_overtime_hours(Some(&text)), 0);
    }
}
