//! Sale records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::id::RecordId;
use crate::validate;

use super::Record;

/// A single sale: a calendar date and an amount in integer cents.
///
/// The date is stored typed and serializes back to `YYYY-MM-DD`, the format
/// the dashboard consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: RecordId,
    pub date: NaiveDate,
    pub amount: i64,
}

/// Body of `POST /sales`. The date arrives as a string so a bad date is a
/// validation error naming the field, not a parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSale {
    pub date: String,
    pub amount: i64,
}

/// Body of `PATCH /sales` (id travels alongside). Absent fields are left
/// untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalePatch {
    pub date: Option<String>,
    pub amount: Option<i64>,
}

impl Record for Sale {
    type Draft = CreateSale;
    type Patch = SalePatch;

    const RESOURCE: &'static str = "sales";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn build(id: RecordId, draft: CreateSale) -> Result<Self> {
        let date = validate::iso_date("date", &draft.date)?;
        let amount = validate::non_negative_cents("amount", draft.amount)?;
        Ok(Sale { id, date, amount })
    }

    fn apply(&mut self, patch: SalePatch) -> Result<()> {
        let date = match patch.date {
            Some(d) => Some(validate::iso_date("date", &d)?),
            None => None,
        };
        let amount = match patch.amount {
            Some(a) => Some(validate::non_negative_cents("amount", a)?),
            None => None,
        };

        if let Some(date) = date {
            self.date = date;
        }
        if let Some(amount) = amount {
            self.amount = amount;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_parses_date_and_keeps_amount() {
        let sale = Sale::build(
            RecordId::from("s1"),
            CreateSale {
                date: "2025-09-05".to_string(),
                amount: 125_000,
            },
        )
        .unwrap();
        assert_eq!(sale.date, NaiveDate::from_ymd_opt(2025, 9, 5).unwrap());
        assert_eq!(sale.amount, 125_000);
    }

    #[test]
    fn test_build_rejects_invalid_month() {
        let err = Sale::build(
            RecordId::from("s1"),
            CreateSale {
                date: "2025-13-01".to_string(),
                amount: 100,
            },
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("date"));
    }

    #[test]
    fn test_build_rejects_negative_amount() {
        let err = Sale::build(
            RecordId::from("s1"),
            CreateSale {
                date: "2025-09-05".to_string(),
                amount: -5,
            },
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("amount"));
    }

    #[test]
    fn test_apply_partial_update() {
        let mut sale = Sale::build(
            RecordId::from("s1"),
            CreateSale {
                date: "2025-09-05".to_string(),
                amount: 100,
            },
        )
        .unwrap();

        sale.apply(SalePatch {
            amount: Some(250),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(sale.amount, 250);
        assert_eq!(sale.date, NaiveDate::from_ymd_opt(2025, 9, 5).unwrap());
    }

    #[test]
    fn test_apply_invalid_date_changes_nothing() {
        let mut sale = Sale::build(
            RecordId::from("s1"),
            CreateSale {
                date: "2025-09-05".to_string(),
                amount: 100,
            },
        )
        .unwrap();
        let before = sale.clone();

        let patch = SalePatch {
            date: Some("2025-02-30".to_string()),
            amount: Some(999),
        };
        assert!(sale.apply(patch).is_err());
        assert_eq!(sale, before);
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let sale = Sale::build(
            RecordId::from("s1"),
            CreateSale {
                date: "2026-01-09".to_string(),
                amount: 305_000,
            },
        )
        .unwrap();
        let json = serde_json::to_value(&sale).unwrap();
        assert_eq!(json["date"], "2026-01-09");
    }
}
