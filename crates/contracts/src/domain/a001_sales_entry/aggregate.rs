use crate::shared::date_window::{format_date_input, parse_datetime_input};
use crate::shared::validation::{
    parse_number, validate_amount, validate_bill_number, ValidationError,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ============================================================================
// Payment type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    Cash,
    Account,
}

impl PaymentType {
    pub const ALL: [PaymentType; 2] = [PaymentType::Cash, PaymentType::Account];

    pub fn code(&self) -> &'static str {
        match self {
            PaymentType::Cash => "CASH",
            PaymentType::Account => "ACCOUNT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentType::Cash => "Cash",
            PaymentType::Account => "Account",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

// ============================================================================
// Entry as returned by the API
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesEntry {
    pub id: i64,
    pub sales_rep_username: String,
    #[serde(default)]
    pub sales_rep_name: String,
    pub outlet: String,
    /// ISO local datetime; seconds may be omitted by the server.
    pub date_time: String,
    pub bill_number: String,
    pub amount: f64,
    pub payment_type: PaymentType,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl SalesEntry {
    pub fn date_time(&self) -> Option<NaiveDateTime> {
        let trimmed = self.date_time.split('.').next().unwrap_or(&self.date_time);
        parse_datetime_input(trimmed)
    }

    pub fn created_by_label(&self) -> &str {
        match self.created_by.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Unknown",
        }
    }
}

// ============================================================================
// Create request
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSalesEntry {
    pub sales_rep_username: String,
    /// `YYYY-MM-DDTHH:MM` as entered.
    pub date_time: String,
    pub bill_number: String,
    pub amount: f64,
    pub payment_type: PaymentType,
}

/// Raw values of the sales entry form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesEntryDraft {
    pub sales_rep_username: String,
    pub date_time: String,
    pub bill_number: String,
    pub amount: String,
    pub payment_type: String,
}

impl SalesEntryDraft {
    pub fn validate(&self) -> Result<NewSalesEntry, ValidationError> {
        if self.sales_rep_username.trim().is_empty() {
            return Err(ValidationError::SalesRepNotSelected);
        }
        if parse_datetime_input(&self.date_time).is_none() {
            return Err(ValidationError::MissingSaleDateTime);
        }
        validate_bill_number(&self.bill_number)?;
        let amount = parse_number(&self.amount).ok_or(ValidationError::AmountOutOfRange)?;
        validate_amount(amount)?;
        let payment_type = PaymentType::from_code(&self.payment_type)
            .ok_or(ValidationError::PaymentTypeNotSelected)?;

        Ok(NewSalesEntry {
            sales_rep_username: self.sales_rep_username.clone(),
            date_time: self.date_time.trim().to_string(),
            bill_number: self.bill_number.clone(),
            amount,
            payment_type,
        })
    }
}

/// `BILL` followed by the local `YYMMDDHHMM` timestamp.
pub fn generate_bill_number(now: NaiveDateTime) -> String {
    format!("BILL{}", now.format("%y%m%d%H%M"))
}

// ============================================================================
// List filter
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesFilter {
    pub from_date: String,
    pub to_date: String,
    pub sales_rep_username: String,
    pub payment_type: String,
}

impl SalesFilter {
    pub fn for_day(day: NaiveDate) -> Self {
        Self {
            from_date: format_date_input(day),
            to_date: format_date_input(day),
            ..Self::default()
        }
    }

    pub fn to_query(&self, outlet: Option<String>) -> SalesQuery {
        SalesQuery {
            from_date: day_start(&self.from_date),
            to_date: day_end(&self.to_date),
            sales_rep_username: non_empty(&self.sales_rep_username),
            payment_type: non_empty(&self.payment_type),
            outlet,
        }
    }
}

/// Query string of `GET /sales` and `GET /sales/dashboard-stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_rep_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet: Option<String>,
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub(crate) fn day_start(date: &str) -> Option<String> {
    non_empty(date).map(|d| format!("{}T00:00:00", d))
}

pub(crate) fn day_end(date: &str) -> Option<String> {
    non_empty(date).map(|d| format!("{}T23:59:59", d))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> SalesEntryDraft {
        SalesEntryDraft {
            sales_rep_username: "anita".into(),
            date_time: "2024-06-10T14:30".into(),
            bill_number: "ABC123".into(),
            amount: "2500".into(),
            payment_type: "CASH".into(),
        }
    }

    #[test]
    fn valid_draft_becomes_request() {
        let entry = draft().validate().unwrap();
        assert_eq!(entry.amount, 2500.0);
        assert_eq!(entry.payment_type, PaymentType::Cash);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["salesRepUsername"], "anita");
        assert_eq!(json["paymentType"], "CASH");
    }

    #[test]
    fn bill_number_checked_before_amount() {
        let mut d = draft();
        d.bill_number = "AB-1".into();
        d.amount = "0".into();
        assert_eq!(d.validate(), Err(ValidationError::InvalidBillNumber));
    }

    #[test]
    fn amount_out_of_range_rejected() {
        let mut d = draft();
        d.amount = "1000000".into();
        assert_eq!(d.validate(), Err(ValidationError::AmountOutOfRange));
        d.amount = "".into();
        assert_eq!(d.validate(), Err(ValidationError::AmountOutOfRange));
    }

    #[test]
    fn missing_selections_rejected() {
        let mut d = draft();
        d.sales_rep_username.clear();
        assert_eq!(d.validate(), Err(ValidationError::SalesRepNotSelected));
        let mut d = draft();
        d.payment_type.clear();
        assert_eq!(d.validate(), Err(ValidationError::PaymentTypeNotSelected));
    }

    #[test]
    fn filter_query_expands_day_bounds() {
        let mut filter = SalesFilter::for_day(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        filter.payment_type = "ACCOUNT".into();
        let query = filter.to_query(Some("SKY_BLUE_WOMEN".into()));
        assert_eq!(query.from_date.as_deref(), Some("2024-06-10T00:00:00"));
        assert_eq!(query.to_date.as_deref(), Some("2024-06-10T23:59:59"));
        assert_eq!(query.sales_rep_username, None);
        assert_eq!(query.payment_type.as_deref(), Some("ACCOUNT"));
    }

    #[test]
    fn bill_number_generation() {
        let now = NaiveDate::from_ymd_opt(2024, 6, 9)
            .unwrap()
            .and_hms_opt(7, 5, 0)
            .unwrap();
        assert_eq!(generate_bill_number(now), "BILL2406090705");
        assert!(validate_bill_number(&generate_bill_number(now)).is_ok());
    }

    #[test]
    fn entry_reads_server_datetime_without_seconds() {
        let raw = r#"{"id":3,"salesRepUsername":"anita","salesRepName":"Anita","outlet":"SKY_BLUE_WOMEN","dateTime":"2024-06-10T14:30","billNumber":"B1","amount":1200.5,"paymentType":"ACCOUNT","createdBy":null}"#;
        let entry: SalesEntry = serde_json::from_str(raw).unwrap();
        assert!(entry.date_time().is_some());
        assert_eq!(entry.created_by_label(), "Unknown");
    }
}
