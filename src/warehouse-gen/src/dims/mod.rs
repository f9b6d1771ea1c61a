use postgres::types::ToSql;

pub mod channels;
pub mod customers;
pub mod date;
pub mod promotions;
pub mod showings;
pub mod time;

/// A dimension row that can be bulk inserted.
pub trait DimensionRow {
    const TABLE: &'static str;
    /// Insert columns. Surrogate keys generated by the store are omitted.
    const COLUMNS: &'static [&'static str];

    /// Values in `COLUMNS` order.
    fn values(&self) -> Vec<&(dyn ToSql + Sync)>;
}
