use std::io;
use std::str::FromStr;

use common::types::FACT_COLUMNS;
use common::types::TABLE_FACT_TICKET_SALES;
use postgres::types::FromSqlOwned;
use postgres::types::ToSql;
use postgres::GenericClient;

use crate::dims::channels::ChannelType;
use crate::dims::DimensionRow;
use crate::error::Result;
use crate::error::WarehouseGenError;
use crate::facts::staging::StagingFile;
use crate::facts::ChannelKey;
use crate::facts::KeyPools;
use crate::facts::PromotionKey;

/// Bind parameters per statement are limited by the wire protocol.
pub const MAX_PARAMS: usize = 65535;
pub const PAGE_SIZE: usize = 5000;

const SELECT_DATE_KEYS: &str = "SELECT date_key FROM dw.dim_date ORDER BY date_key";
const SELECT_TIME_KEYS: &str = "SELECT time_key FROM dw.dim_time ORDER BY time_key";
const SELECT_CUSTOMER_KEYS: &str =
    "SELECT customer_key FROM dw.dim_customer ORDER BY customer_key";
const SELECT_PROMOTION_KEYS: &str = "SELECT promotion_key, promotion_id IS NOT NULL \
     FROM dw.dim_promotion ORDER BY promotion_key";
const SELECT_CHANNEL_KEYS: &str =
    "SELECT channel_key, channel_type FROM dw.dim_channel ORDER BY channel_key";
const SELECT_SHOWING_KEYS: &str = "SELECT showing_key FROM dw.dim_showing ORDER BY showing_key";
const COUNT_FACTS: &str = "SELECT COUNT(*) FROM dw.fact_ticket_sales";

/// `INSERT INTO <table> (<cols>) VALUES ($1, $2), ($3, $4), ...`
pub fn insert_statement(table: &str, columns: &[&str], rows: usize) -> String {
    let mut sql = format!("INSERT INTO {table} ({}) VALUES ", columns.join(", "));
    let mut param = 1;
    for row in 0..rows {
        if row > 0 {
            sql.push_str(", ");
        }
        sql.push('(');
        for col in 0..columns.len() {
            if col > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&format!("${param}"));
            param += 1;
        }
        sql.push(')');
    }

    sql
}

pub fn rows_per_page(columns: usize) -> usize {
    (MAX_PARAMS / columns.max(1)).clamp(1, PAGE_SIZE)
}

/// Inserts all rows with paged multi-row statements. Returns the number of inserted rows.
pub fn insert_rows<C: GenericClient, T: DimensionRow>(client: &mut C, rows: &[T]) -> Result<u64> {
    let page = rows_per_page(T::COLUMNS.len());
    let mut inserted = 0;
    for chunk in rows.chunks(page) {
        let sql = insert_statement(T::TABLE, T::COLUMNS, chunk.len());
        let params: Vec<&(dyn ToSql + Sync)> = chunk.iter().flat_map(|row| row.values()).collect();
        inserted += client.execute(sql.as_str(), &params)?;
    }

    Ok(inserted)
}

fn fetch_column<C: GenericClient, T: FromSqlOwned>(client: &mut C, sql: &str) -> Result<Vec<T>> {
    let mut out = vec![];
    for row in client.query(sql, &[])? {
        out.push(row.try_get(0)?);
    }

    Ok(out)
}

/// Reads back every surrogate key, ordered by key so that sampling from the
/// pools is reproducible for a given seed.
pub fn fetch_key_pools<C: GenericClient>(client: &mut C) -> Result<KeyPools> {
    let mut promotions = vec![];
    for row in client.query(SELECT_PROMOTION_KEYS, &[])? {
        promotions.push(PromotionKey {
            key: row.try_get(0)?,
            is_discount: row.try_get(1)?,
        });
    }

    let mut channels = vec![];
    for row in client.query(SELECT_CHANNEL_KEYS, &[])? {
        let channel_type: String = row.try_get(1)?;
        channels.push(ChannelKey {
            key: row.try_get(0)?,
            channel_type: ChannelType::from_str(&channel_type).map_err(|_| {
                WarehouseGenError::Internal(format!("unknown channel type {channel_type}"))
            })?,
        });
    }

    let pools = KeyPools {
        dates: fetch_column(client, SELECT_DATE_KEYS)?,
        times: fetch_column(client, SELECT_TIME_KEYS)?,
        customers: fetch_column(client, SELECT_CUSTOMER_KEYS)?,
        promotions,
        channels,
        showings: fetch_column(client, SELECT_SHOWING_KEYS)?,
    };
    pools.validate()?;

    Ok(pools)
}

pub fn copy_statement() -> String {
    format!(
        "COPY {TABLE_FACT_TICKET_SALES} ({}) FROM STDIN WITH (FORMAT text, DELIMITER E'\\t')",
        FACT_COLUMNS.join(", ")
    )
}

/// Streams the staging file into the fact table. Returns the number of copied rows.
pub fn copy_facts<C: GenericClient>(client: &mut C, staging: &StagingFile) -> Result<u64> {
    let mut src = staging.open()?;
    let mut writer = client.copy_in(copy_statement().as_str())?;
    io::copy(&mut src, &mut writer)?;

    Ok(writer.finish()?)
}

pub fn count_facts<C: GenericClient>(client: &mut C) -> Result<i64> {
    Ok(client.query_one(COUNT_FACTS, &[])?.try_get(0)?)
}
