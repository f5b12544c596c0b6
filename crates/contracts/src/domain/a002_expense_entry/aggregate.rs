use crate::domain::a001_sales_entry::aggregate::non_empty;
use crate::shared::date_window::{format_date_input, parse_date_input};
use crate::shared::validation::{parse_number, validate_amount, ValidationError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseType {
    Tea,
    Mess,
    Dinner,
    Breakfast,
    Lunch,
    Charity,
    ChitFund,
    Advance,
}

impl ExpenseType {
    pub const ALL: [ExpenseType; 8] = [
        ExpenseType::Tea,
        ExpenseType::Mess,
        ExpenseType::Dinner,
        ExpenseType::Breakfast,
        ExpenseType::Lunch,
        ExpenseType::Charity,
        ExpenseType::ChitFund,
        ExpenseType::Advance,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ExpenseType::Tea => "TEA",
            ExpenseType::Mess => "MESS",
            ExpenseType::Dinner => "DINNER",
            ExpenseType::Breakfast => "BREAKFAST",
            ExpenseType::Lunch => "LUNCH",
            ExpenseType::Charity => "CHARITY",
            ExpenseType::ChitFund => "CHIT_FUND",
            ExpenseType::Advance => "ADVANCE",
        }
    }

    /// Display label: the code with its underscore shown as a space.
    pub fn label(&self) -> String {
        self.code().replace('_', " ")
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn is_advance(&self) -> bool {
        matches!(self, ExpenseType::Advance)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseEntry {
    pub id: i64,
    pub outlet: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub advance_to_username: Option<String>,
    #[serde(default)]
    pub advance_to_name: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ExpenseEntry {
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Recipient column text, `-` when the expense is not an advance.
    pub fn advance_to_label(&self) -> &str {
        match self.advance_to_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpenseEntry {
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    pub advance_to_username: Option<String>,
}

/// Raw values of the expense entry form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub expense_type: String,
    pub amount: String,
    pub date: String,
    pub description: String,
    pub advance_to_username: String,
}

impl ExpenseDraft {
    pub fn for_day(day: NaiveDate) -> Self {
        Self {
            date: format_date_input(day),
            ..Self::default()
        }
    }

    pub fn requires_advance_recipient(&self) -> bool {
        ExpenseType::from_code(&self.expense_type).is_some_and(|t| t.is_advance())
    }

    /// Changes the type; leaving ADVANCE drops the chosen recipient.
    pub fn set_type(&mut self, code: &str) {
        self.expense_type = code.to_string();
        if !self.requires_advance_recipient() {
            self.advance_to_username.clear();
        }
    }

    pub fn validate(&self) -> Result<NewExpenseEntry, ValidationError> {
        let expense_type = ExpenseType::from_code(&self.expense_type)
            .ok_or(ValidationError::ExpenseTypeNotSelected)?;
        let amount = parse_number(&self.amount).ok_or(ValidationError::AmountOutOfRange)?;
        validate_amount(amount)?;
        let date = parse_date_input(&self.date).ok_or(ValidationError::MissingExpenseDate)?;
        let advance_to_username = if expense_type.is_advance() {
            Some(
                non_empty(&self.advance_to_username)
                    .ok_or(ValidationError::AdvanceRecipientRequired)?,
            )
        } else {
            None
        };

        Ok(NewExpenseEntry {
            expense_type,
            amount,
            date,
            description: self.description.trim().to_string(),
            advance_to_username,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    pub from_date: String,
    pub to_date: String,
    pub expense_type: String,
    pub advance_to_username: String,
}

impl ExpenseFilter {
    /// First day of the month through `today`.
    pub fn month_to_date(today: NaiveDate) -> Self {
        let first = today.with_day(1).unwrap_or(today);
        Self {
            from_date: format_date_input(first),
            to_date: format_date_input(today),
            ..Self::default()
        }
    }

    pub fn to_query(&self, outlet: Option<String>) -> ExpenseQuery {
        ExpenseQuery {
            from_date: non_empty(&self.from_date),
            to_date: non_empty(&self.to_date),
            expense_type: non_empty(&self.expense_type),
            advance_to_username: non_empty(&self.advance_to_username),
            outlet,
        }
    }
}

/// Query string of `GET /expenses`; dates are plain `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub expense_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance_to_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet: Option<String>,
}
