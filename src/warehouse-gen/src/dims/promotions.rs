use chrono::NaiveDate;
use common::types::TABLE_DIM_PROMOTION;
use postgres::types::ToSql;
use rust_decimal::Decimal;

use crate::dims::DimensionRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionRow {
    /// `None` marks the "no promotion" record.
    pub promotion_id: Option<i64>,
    pub description: &'static str,
    pub discount: Decimal,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DimensionRow for PromotionRow {
    const TABLE: &'static str = TABLE_DIM_PROMOTION;
    const COLUMNS: &'static [&'static str] = &[
        "promotion_id",
        "description",
        "discount",
        "start_date",
        "end_date",
    ];

    fn values(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.promotion_id,
            &self.description,
            &self.discount,
            &self.start_date,
            &self.end_date,
        ]
    }
}

/// The sentinel comes first so that it gets the lowest surrogate key.
pub fn generate() -> Vec<PromotionRow> {
    let start = NaiveDate::from_ymd_opt(2014, 1, 1);
    let end = NaiveDate::from_ymd_opt(2026, 12, 31);
    let promotion = |id: i64, description: &'static str, discount: Decimal| PromotionRow {
        promotion_id: Some(id),
        description,
        discount,
        start_date: start,
        end_date: end,
    };

    vec![
        PromotionRow {
            promotion_id: None,
            description: "No Promotion",
            discount: Decimal::new(0, 2),
            start_date: None,
            end_date: None,
        },
        promotion(1, "Discount", Decimal::new(1000, 2)),
        promotion(2, "Student", Decimal::new(1500, 2)),
        promotion(3, "Weekend Deal", Decimal::new(1250, 2)),
    ]
}
