//! Sales report rows

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One row of the sales report list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub order_id: String,
    pub customer_name: String,
    pub date: NaiveDate,
    pub total: Decimal,
    #[serde(default)]
    pub paid: Decimal,
    #[serde(default)]
    pub outstanding: Decimal,
}

/// Report filter, sent as query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub search: Option<String>,
}

impl ReportQuery {
    pub fn validate(&self) -> Result<(), AppError> {
        if let (Some(from), Some(to)) = (self.from, self.to)
            && from > to
        {
            return Err(AppError::validation(format!(
                "report start {from} is after end {to}"
            )));
        }
        Ok(())
    }

    /// Query parameters; empty filters are sent as empty strings so they
    /// override a previous value
    pub fn to_params(&self) -> Vec<(String, String)> {
        vec![
            (
                "from".to_string(),
                self.from.map(|d| d.to_string()).unwrap_or_default(),
            ),
            (
                "to".to_string(),
                self.to.map(|d| d.to_string()).unwrap_or_default(),
            ),
            (
                "search".to_string(),
                self.search.clone().unwrap_or_default(),
            ),
        ]
    }
}

/// Totals across report rows
pub fn summarize(rows: &[ReportRow]) -> (Decimal, Decimal, Decimal) {
    rows.iter().fold(
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
        |(total, paid, outstanding), row| {
            (total + row.total, paid + row.paid, outstanding + row.outstanding)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_query_range_validation() {
        let q = ReportQuery {
            from: NaiveDate::from_ymd_opt(2024, 3, 1),
            to: NaiveDate::from_ymd_opt(2024, 2, 1),
            search: None,
        };
        assert!(q.validate().is_err());
        assert!(ReportQuery::default().validate().is_ok());
    }

    #[test]
    fn test_to_params() {
        let q = ReportQuery {
            from: NaiveDate::from_ymd_opt(2024, 1, 1),
            to: None,
            search: Some("jati".into()),
        };
        assert_eq!(
            q.to_params(),
            vec![
                ("from".to_string(), "2024-01-01".to_string()),
                ("to".to_string(), String::new()),
                ("search".to_string(), "jati".to_string()),
            ]
        );
    }

    #[test]
    fn test_summarize() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let rows = vec![
            ReportRow {
                order_id: "o1".into(),
                customer_name: "A".into(),
                date,
                total: dec!(100),
                paid: dec!(40),
                outstanding: dec!(60),
            },
            ReportRow {
                order_id: "o2".into(),
                customer_name: "B".into(),
                date,
                total: dec!(50),
                paid: dec!(50),
                outstanding: dec!(0),
            },
        ];
        assert_eq!(summarize(&rows), (dec!(150), dec!(90), dec!(60)));
    }
}
