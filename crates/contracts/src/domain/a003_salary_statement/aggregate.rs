use crate::domain::a002_expense_entry::aggregate::ExpenseEntry;
use crate::shared::date_window::parse_date_input;
use crate::shared::validation::{parse_number, validate_salary_form, SalaryFields, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Computed statement for one employee over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryStatement {
    pub employee_name: String,
    pub employee_username: String,
    pub outlet: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub base_salary: f64,
    pub total_sales: f64,
    #[serde(default)]
    pub transaction_count: i64,
    pub incentive_percentage: f64,
    pub incentive_amount: f64,
    pub total_advances: f64,
    pub net_salary: f64,
    #[serde(default)]
    pub advances: Vec<ExpenseEntry>,
}

/// `base + incentive - advances`.
pub fn net_salary(base_salary: f64, incentive_amount: f64, total_advances: f64) -> f64 {
    base_salary + incentive_amount - total_advances
}

impl SalaryStatement {
    pub fn gross_earnings(&self) -> f64 {
        self.base_salary + self.incentive_amount
    }

    /// Net salary recomputed from the components.
    pub fn computed_net_salary(&self) -> f64 {
        net_salary(self.base_salary, self.incentive_amount, self.total_advances)
    }

    pub fn has_advances(&self) -> bool {
        !self.advances.is_empty()
    }

    /// `salary_statement_<Name_Parts>_<from>_to_<to>.txt`
    pub fn download_file_name(&self) -> String {
        let name = self
            .employee_name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        format!(
            "salary_statement_{}_{}_to_{}.txt",
            name, self.from_date, self.to_date
        )
    }
}

/// Query of `POST /salary/statement`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryStatementRequest {
    pub employee_username: String,
    pub incentive_percentage: f64,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub base_salary: f64,
}

/// Raw values of the salary form.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryStatementDraft {
    pub employee_username: String,
    pub incentive_percentage: String,
    pub from_date: String,
    pub to_date: String,
    pub base_salary: String,
}

impl Default for SalaryStatementDraft {
    fn default() -> Self {
        Self {
            employee_username: String::new(),
            incentive_percentage: "0".into(),
            from_date: String::new(),
            to_date: String::new(),
            base_salary: "0".into(),
        }
    }
}

impl SalaryStatementDraft {
    pub fn fields(&self) -> SalaryFields {
        SalaryFields {
            employee_username: self.employee_username.trim().to_string(),
            incentive_percentage: parse_number(&self.incentive_percentage),
            from_date: parse_date_input(&self.from_date),
            to_date: parse_date_input(&self.to_date),
            base_salary: parse_number(&self.base_salary),
        }
    }

    pub fn validate(&self) -> Result<SalaryStatementRequest, ValidationError> {
        let fields = self.fields();
        validate_salary_form(&fields)?;
        match fields {
            SalaryFields {
                employee_username,
                incentive_percentage: Some(incentive_percentage),
                from_date: Some(from_date),
                to_date: Some(to_date),
                base_salary: Some(base_salary),
            } => Ok(SalaryStatementRequest {
                employee_username,
                incentive_percentage,
                from_date,
                to_date,
                base_salary,
            }),
            _ => Err(ValidationError::MissingPeriod),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statement() -> SalaryStatement {
        let raw = r#"{
            "employeeName": "Anita  Devi",
            "employeeUsername": "anita",
            "outlet": "SKY_BLUE_WOMEN",
            "fromDate": "2024-06-01",
            "toDate": "2024-06-30",
            "baseSalary": 20000,
            "totalSales": 30000,
            "transactionCount": 12,
            "incentivePercentage": 5,
            "incentiveAmount": 1500,
            "totalAdvances": 3000,
            "netSalary": 18500,
            "advances": []
        }"#;
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn net_salary_subtracts_advances() {
        assert_eq!(net_salary(20000.0, 1500.0, 3000.0), 18500.0);
        let s = statement();
        assert_eq!(s.computed_net_salary(), s.net_salary);
        assert_eq!(s.gross_earnings(), 21500.0);
        assert!(!s.has_advances());
    }

    #[test]
    fn download_name_joins_name_parts() {
        assert_eq!(
            statement().download_file_name(),
            "salary_statement_Anita_Devi_2024-06-01_to_2024-06-30.txt"
        );
    }

    #[test]
    fn draft_validates_into_request() {
        let draft = SalaryStatementDraft {
            employee_username: "anita".into(),
            incentive_percentage: "5".into(),
            from_date: "2024-06-01".into(),
            to_date: "2024-06-30".into(),
            base_salary: "20000".into(),
        };
        let request = draft.validate().unwrap();
        assert_eq!(request.incentive_percentage, 5.0);
        let query = serde_qs::to_string(&request).unwrap();
        assert!(query.contains("employeeUsername=anita"));
        assert!(query.contains("fromDate=2024-06-01"));
    }

    #[test]
    fn draft_reports_first_failure() {
        let draft = SalaryStatementDraft::default();
        assert_eq!(draft.validate(), Err(ValidationError::EmployeeNotSelected));

        let draft = SalaryStatementDraft {
            employee_username: "anita".into(),
            from_date: "2024-07-01".into(),
            to_date: "2024-06-30".into(),
            ..SalaryStatementDraft::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::FromAfterTo));
    }
}
