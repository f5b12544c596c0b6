//! Client-side form rules.
//!
//! Each rule either passes or returns the [`ValidationError`] whose `Display`
//! text is shown to the user. Composite validators stop at the first failure.

use crate::shared::date_window::DashboardRangeRule;
use chrono::NaiveDate;
use thiserror::Error;

/// Upper bound (exclusive) for a single sale or expense.
pub const MAX_AMOUNT: f64 = 1_000_000.0;

pub type ValidationResult = Result<(), ValidationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Bill number should contain only letters and numbers")]
    InvalidBillNumber,
    #[error("Amount should be between ₹1 and ₹10,00,000")]
    AmountOutOfRange,
    #[error("Please select a sales representative")]
    SalesRepNotSelected,
    #[error("Please select the sale date and time")]
    MissingSaleDateTime,
    #[error("Please select a payment type")]
    PaymentTypeNotSelected,
    #[error("Please select an expense type")]
    ExpenseTypeNotSelected,
    #[error("Please select the expense date")]
    MissingExpenseDate,
    #[error("Please select the employee receiving the advance")]
    AdvanceRecipientRequired,
    #[error("Please select an employee")]
    EmployeeNotSelected,
    #[error("Incentive percentage must be between 0 and 100")]
    IncentiveOutOfRange,
    #[error("Please select both from and to dates")]
    MissingPeriod,
    #[error("From date cannot be later than to date")]
    FromAfterTo,
    #[error("Base salary must be a positive number")]
    NegativeBaseSalary,
    #[error("From date cannot be more than {lookback_days} days before to date")]
    OutsideLookback { lookback_days: i64 },
    #[error("Username may contain only letters, numbers and underscores")]
    InvalidUsername,
    #[error("Full name must be at least 2 characters")]
    FullNameTooShort,
    #[error("Please select a role")]
    RoleNotSelected,
    #[error("Please select an outlet")]
    OutletNotSelected,
}

/// Parses a numeric form field. Blank or non-finite input yields `None`.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

pub fn validate_bill_number(bill_number: &str) -> ValidationResult {
    if !bill_number.is_empty() && bill_number.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidBillNumber)
    }
}

pub fn validate_amount(amount: f64) -> ValidationResult {
    if amount > 0.0 && amount < MAX_AMOUNT {
        Ok(())
    } else {
        Err(ValidationError::AmountOutOfRange)
    }
}

pub fn validate_username(username: &str) -> ValidationResult {
    if !username.is_empty() && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(ValidationError::InvalidUsername)
    }
}

pub fn validate_full_name(full_name: &str) -> ValidationResult {
    if full_name.trim().chars().count() >= 2 {
        Ok(())
    } else {
        Err(ValidationError::FullNameTooShort)
    }
}

pub fn validate_incentive_percentage(value: Option<f64>) -> ValidationResult {
    match value {
        Some(percentage) if (0.0..=100.0).contains(&percentage) => Ok(()),
        _ => Err(ValidationError::IncentiveOutOfRange),
    }
}

pub fn validate_base_salary(value: Option<f64>) -> ValidationResult {
    match value {
        Some(salary) if salary >= 0.0 => Ok(()),
        _ => Err(ValidationError::NegativeBaseSalary),
    }
}

/// Filter range check; the trailing window rule adds the lookback bound.
pub fn validate_date_range(
    from: NaiveDate,
    to: NaiveDate,
    rule: &DashboardRangeRule,
) -> ValidationResult {
    if from > to {
        return Err(ValidationError::FromAfterTo);
    }
    if let (Some(start), DashboardRangeRule::TrailingWindow { lookback_days }) =
        (rule.window_start(to), rule)
    {
        if from < start {
            return Err(ValidationError::OutsideLookback {
                lookback_days: *lookback_days,
            });
        }
    }
    Ok(())
}

/// Parsed salary form values; `None` stands for a blank or unreadable field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryFields {
    pub employee_username: String,
    pub incentive_percentage: Option<f64>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub base_salary: Option<f64>,
}

pub fn validate_salary_form(fields: &SalaryFields) -> ValidationResult {
    if fields.employee_username.trim().is_empty() {
        return Err(ValidationError::EmployeeNotSelected);
    }
    validate_incentive_percentage(fields.incentive_percentage)?;
    let (from, to) = match (fields.from_date, fields.to_date) {
        (Some(from), Some(to)) => (from, to),
        _ => return Err(ValidationError::MissingPeriod),
    };
    if from > to {
        return Err(ValidationError::FromAfterTo);
    }
    validate_base_salary(fields.base_salary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::date_window::parse_date_input;

    fn date(s: &str) -> NaiveDate {
        parse_date_input(s).unwrap()
    }

    fn salary_fields() -> SalaryFields {
        SalaryFields {
            employee_username: "anita".into(),
            incentive_percentage: Some(5.0),
            from_date: Some(date("2024-06-01")),
            to_date: Some(date("2024-06-30")),
            base_salary: Some(20000.0),
        }
    }

    #[test]
    fn bill_number_rules() {
        assert!(validate_bill_number("ABC123").is_ok());
        assert_eq!(
            validate_bill_number("AB-123"),
            Err(ValidationError::InvalidBillNumber)
        );
        assert!(validate_bill_number("").is_err());
        assert!(validate_bill_number("BILL 1").is_err());
        assert!(validate_bill_number("Ä1").is_err());
    }

    #[test]
    fn amount_rules() {
        assert!(validate_amount(1.0).is_ok());
        assert!(validate_amount(999_999.0).is_ok());
        assert!(validate_amount(0.0).is_err());
        assert!(validate_amount(1_000_000.0).is_err());
        assert!(validate_amount(-5.0).is_err());
        assert!(validate_amount(f64::NAN).is_err());
    }

    #[test]
    fn salary_form_passes_when_complete() {
        assert!(validate_salary_form(&salary_fields()).is_ok());
        let mut zero_base = salary_fields();
        zero_base.base_salary = Some(0.0);
        assert!(validate_salary_form(&zero_base).is_ok());
    }

    #[test]
    fn salary_form_fails_fast_in_order() {
        let everything_wrong = SalaryFields {
            employee_username: String::new(),
            incentive_percentage: Some(150.0),
            from_date: None,
            to_date: None,
            base_salary: Some(-1.0),
        };
        assert_eq!(
            validate_salary_form(&everything_wrong),
            Err(ValidationError::EmployeeNotSelected)
        );

        let mut fields = salary_fields();
        fields.incentive_percentage = Some(100.5);
        fields.base_salary = Some(-1.0);
        assert_eq!(
            validate_salary_form(&fields),
            Err(ValidationError::IncentiveOutOfRange)
        );

        let mut fields = salary_fields();
        fields.incentive_percentage = None;
        assert_eq!(
            validate_salary_form(&fields),
            Err(ValidationError::IncentiveOutOfRange)
        );

        let mut fields = salary_fields();
        fields.to_date = None;
        assert_eq!(validate_salary_form(&fields), Err(ValidationError::MissingPeriod));

        let mut fields = salary_fields();
        fields.from_date = Some(date("2024-07-01"));
        assert_eq!(validate_salary_form(&fields), Err(ValidationError::FromAfterTo));

        let mut fields = salary_fields();
        fields.base_salary = None;
        assert_eq!(
            validate_salary_form(&fields),
            Err(ValidationError::NegativeBaseSalary)
        );
    }

    #[test]
    fn messages_are_distinct() {
        let messages = [
            ValidationError::EmployeeNotSelected,
            ValidationError::IncentiveOutOfRange,
            ValidationError::MissingPeriod,
            ValidationError::FromAfterTo,
            ValidationError::NegativeBaseSalary,
        ]
        .map(|e| e.to_string());
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn date_range_respects_lookback_only_for_trailing_rule() {
        let window = DashboardRangeRule::TrailingWindow { lookback_days: 3 };
        assert!(validate_date_range(date("2024-06-07"), date("2024-06-10"), &window).is_ok());
        assert_eq!(
            validate_date_range(date("2024-06-06"), date("2024-06-10"), &window),
            Err(ValidationError::OutsideLookback { lookback_days: 3 })
        );
        assert!(
            validate_date_range(date("2024-01-01"), date("2024-06-10"), &DashboardRangeRule::Free)
                .is_ok()
        );
        assert_eq!(
            validate_date_range(date("2024-06-11"), date("2024-06-10"), &DashboardRangeRule::Free),
            Err(ValidationError::FromAfterTo)
        );
    }

    #[test]
    fn user_field_rules() {
        assert!(validate_username("priya_s2").is_ok());
        assert!(validate_username("priya.s").is_err());
        assert!(validate_full_name(" P ").is_err());
        assert!(validate_full_name("Po").is_ok());
    }

    #[test]
    fn number_parsing() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
    }
}
