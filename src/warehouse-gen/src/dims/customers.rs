use chrono::NaiveDate;
use common::types::TABLE_DIM_CUSTOMER;
use postgres::types::ToSql;
use rand::Rng;

use crate::dims::DimensionRow;
use crate::error::Result;
use crate::error::WarehouseGenError;
use crate::vocab;

pub const MIN_BIRTH_YEAR: i32 = 1940;
pub const MAX_BIRTH_YEAR: i32 = 2012;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRow {
    pub customer_id: i64,
    pub name: String,
    pub dob: Option<NaiveDate>,
    pub gender: &'static str,
    pub address: String,
}

impl DimensionRow for CustomerRow {
    const TABLE: &'static str = TABLE_DIM_CUSTOMER;
    const COLUMNS: &'static [&'static str] = &["customer_id", "name", "dob", "gender", "address"];

    fn values(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.customer_id,
            &self.name,
            &self.dob,
            &self.gender,
            &self.address,
        ]
    }
}

/// Date with year in `years` and a day of month no later than the 28th, so
/// every combination is a valid calendar date.
pub fn random_date<R: Rng>(
    rng: &mut R,
    years: std::ops::RangeInclusive<i32>,
) -> Result<NaiveDate> {
    let y = rng.gen_range(years);
    let m = rng.gen_range(1..=12);
    let d = rng.gen_range(1..=28);
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| WarehouseGenError::Internal(format!("invalid date {y}-{m}-{d}")))
}

pub fn generate<R: Rng>(rng: &mut R, n: u64) -> Result<Vec<CustomerRow>> {
    let mut rows = Vec::with_capacity(n as usize);
    for customer_id in 1..=n as i64 {
        let dob = random_date(rng, MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR)?;
        let gender = *vocab::pick(rng, &vocab::GENDERS);
        let town = vocab::pick(rng, &vocab::TOWNS);
        rows.push(CustomerRow {
            customer_id,
            name: vocab::random_name(rng),
            dob: Some(dob),
            gender,
            address: format!("{town}, Qatar"),
        });
    }

    Ok(rows)
}
