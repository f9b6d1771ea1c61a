use common::types::TABLE_FACT_TICKET_SALES;
use postgres::Client;
use tracing::debug;

use crate::error::Result;
use crate::error::WarehouseGenError;

pub const DROP_SCHEMA: &str = "DROP SCHEMA IF EXISTS dw CASCADE";
pub const CREATE_SCHEMA: &str = "CREATE SCHEMA IF NOT EXISTS dw";

pub const CREATE_DIM_DATE: &str = r#"
CREATE TABLE dw.dim_date (
  date_key        INTEGER PRIMARY KEY,
  full_date       DATE NOT NULL UNIQUE,
  day_of_month    SMALLINT NOT NULL,
  month_num       SMALLINT NOT NULL,
  month_name      TEXT NOT NULL,
  quarter_num     SMALLINT NOT NULL,
  year_num        SMALLINT NOT NULL,
  is_weekend      BOOLEAN NOT NULL,
  week_start_date DATE NOT NULL,
  iso_year        SMALLINT NOT NULL,
  iso_week        SMALLINT NOT NULL
)"#;

pub const CREATE_DIM_TIME: &str = r#"
CREATE TABLE dw.dim_time (
  time_key     INTEGER PRIMARY KEY,
  full_time    TIME NOT NULL UNIQUE,
  hour_num     SMALLINT NOT NULL,
  minute_num   SMALLINT NOT NULL,
  time_slot    TEXT NOT NULL
)"#;

pub const CREATE_DIM_CUSTOMER: &str = r#"
CREATE TABLE dw.dim_customer (
  customer_key BIGSERIAL PRIMARY KEY,
  customer_id  BIGINT NOT NULL UNIQUE,
  name         TEXT NOT NULL,
  dob          DATE,
  gender       TEXT,
  address      TEXT
)"#;

pub const CREATE_DIM_PROMOTION: &str = r#"
CREATE TABLE dw.dim_promotion (
  promotion_key BIGSERIAL PRIMARY KEY,
  promotion_id  BIGINT UNIQUE,
  description   TEXT NOT NULL,
  discount      NUMERIC(6,2),
  start_date    DATE,
  end_date      DATE
)"#;

pub const CREATE_DIM_CHANNEL: &str = r#"
CREATE TABLE dw.dim_channel (
  channel_key   BIGSERIAL PRIMARY KEY,
  channel_type  TEXT NOT NULL,
  system_name   TEXT,
  browser_name  TEXT,
  pay_method    TEXT NOT NULL
)"#;

pub const CREATE_DIM_SHOWING: &str = r#"
CREATE TABLE dw.dim_showing (
  showing_key        BIGSERIAL PRIMARY KEY,
  showing_id         BIGINT NOT NULL UNIQUE,
  showing_date       DATE NOT NULL,
  showing_time       TIME NOT NULL,
  showing_is_weekend BOOLEAN NOT NULL,
  showing_time_slot  TEXT NOT NULL,

  hall_id            BIGINT,
  hall_size          INTEGER,
  hall_size_category TEXT NOT NULL,

  cinema_id          BIGINT,
  cinema_name        TEXT,
  cinema_address     TEXT,
  cinema_city        TEXT,
  cinema_state       TEXT,

  movie_id           BIGINT,
  movie_title        TEXT,
  movie_language     TEXT,
  movie_release_date DATE,
  movie_cost         NUMERIC(12,2),
  movie_country      TEXT,

  director_id        BIGINT,
  director_name      TEXT,
  director_dob       DATE,
  director_gender    TEXT,

  genre_name         TEXT,
  cast_list          TEXT,
  has_omar_sharif    BOOLEAN NOT NULL DEFAULT FALSE
)"#;

pub const CREATE_FACT_TICKET_SALES: &str = r#"
CREATE TABLE dw.fact_ticket_sales (
  fact_id        BIGSERIAL PRIMARY KEY,
  ticket_id      BIGINT NOT NULL,
  transaction_id BIGINT NOT NULL,
  date_key       INTEGER NOT NULL REFERENCES dw.dim_date(date_key),
  time_key       INTEGER NOT NULL REFERENCES dw.dim_time(time_key),
  customer_key   BIGINT NOT NULL REFERENCES dw.dim_customer(customer_key),
  promotion_key  BIGINT NOT NULL REFERENCES dw.dim_promotion(promotion_key),
  channel_key    BIGINT NOT NULL REFERENCES dw.dim_channel(channel_key),
  showing_key    BIGINT NOT NULL REFERENCES dw.dim_showing(showing_key),
  ticket_price   NUMERIC(8,2) NOT NULL,
  ticket_count   SMALLINT NOT NULL DEFAULT 1
)"#;

/// Executed in order, each as a separate statement.
pub const DDL_STATEMENTS: [&str; 14] = [
    DROP_SCHEMA,
    CREATE_SCHEMA,
    CREATE_DIM_DATE,
    CREATE_DIM_TIME,
    CREATE_DIM_CUSTOMER,
    CREATE_DIM_PROMOTION,
    CREATE_DIM_CHANNEL,
    CREATE_DIM_SHOWING,
    CREATE_FACT_TICKET_SALES,
    "CREATE INDEX ix_fact_date ON dw.fact_ticket_sales(date_key)",
    "CREATE INDEX ix_fact_showing ON dw.fact_ticket_sales(showing_key)",
    "CREATE INDEX ix_fact_channel ON dw.fact_ticket_sales(channel_key)",
    "CREATE INDEX ix_fact_customer ON dw.fact_ticket_sales(customer_key)",
    "CREATE INDEX ix_fact_tx ON dw.fact_ticket_sales(transaction_id)",
];

/// Drops and recreates schema `dw`. Everything in it is lost.
pub fn build(client: &mut Client) -> Result<()> {
    let mut tx = client.transaction()?;
    for stmt in DDL_STATEMENTS {
        let stmt = stmt.trim();
        debug!("executing: {}", stmt.lines().next().unwrap_or_default());
        tx.batch_execute(stmt)?;
    }
    tx.commit()?;

    verify(client)
}

/// Fails unless the fact table resolves in the catalog.
pub fn verify(client: &mut Client) -> Result<()> {
    let row = client.query_one("SELECT to_regclass($1)::text", &[&TABLE_FACT_TICKET_SALES])?;
    let table: Option<String> = row.try_get(0)?;
    match table {
        Some(_) => Ok(()),
        None => Err(WarehouseGenError::SchemaVerification(format!(
            "{TABLE_FACT_TICKET_SALES} not created"
        ))),
    }
}
