use chrono::Datelike;
use chrono::NaiveDate;
use common::types::TABLE_DIM_DATE;
use postgres::types::ToSql;

use crate::calendar;
use crate::calendar::MONTH_NAMES;
use crate::dims::DimensionRow;
use crate::error::Result;
use crate::error::WarehouseGenError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRow {
    pub date_key: i32,
    pub full_date: NaiveDate,
    pub day_of_month: i16,
    pub month_num: i16,
    pub month_name: &'static str,
    pub quarter_num: i16,
    pub year_num: i16,
    pub is_weekend: bool,
    pub week_start_date: NaiveDate,
    pub iso_year: i16,
    pub iso_week: i16,
}

impl DateRow {
    pub fn new(d: NaiveDate) -> Self {
        let iso = d.iso_week();
        Self {
            date_key: calendar::date_key(d),
            full_date: d,
            day_of_month: d.day() as i16,
            month_num: d.month() as i16,
            month_name: MONTH_NAMES[d.month0() as usize],
            quarter_num: (d.month0() / 3 + 1) as i16,
            year_num: d.year() as i16,
            is_weekend: calendar::is_weekend(d),
            week_start_date: calendar::week_start(d),
            iso_year: iso.year() as i16,
            iso_week: iso.week() as i16,
        }
    }
}

impl DimensionRow for DateRow {
    const TABLE: &'static str = TABLE_DIM_DATE;
    const COLUMNS: &'static [&'static str] = &[
        "date_key",
        "full_date",
        "day_of_month",
        "month_num",
        "month_name",
        "quarter_num",
        "year_num",
        "is_weekend",
        "week_start_date",
        "iso_year",
        "iso_week",
    ];

    fn values(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.date_key,
            &self.full_date,
            &self.day_of_month,
            &self.month_num,
            &self.month_name,
            &self.quarter_num,
            &self.year_num,
            &self.is_weekend,
            &self.week_start_date,
            &self.iso_year,
            &self.iso_week,
        ]
    }
}

pub fn generate(start: NaiveDate, end: NaiveDate) -> Result<Vec<DateRow>> {
    if start > end {
        return Err(WarehouseGenError::InvalidDateRange(start, end));
    }

    Ok(calendar::days(start, end).map(DateRow::new).collect())
}
