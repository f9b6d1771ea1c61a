pub const TABLE_DIM_DATE: &str = "dw.dim_date";
pub const TABLE_DIM_TIME: &str = "dw.dim_time";
pub const TABLE_DIM_CUSTOMER: &str = "dw.dim_customer";
pub const TABLE_DIM_PROMOTION: &str = "dw.dim_promotion";
pub const TABLE_DIM_CHANNEL: &str = "dw.dim_channel";
pub const TABLE_DIM_SHOWING: &str = "dw.dim_showing";
pub const TABLE_FACT_TICKET_SALES: &str = "dw.fact_ticket_sales";

pub const COLUMN_DATE_KEY: &str = "date_key";
pub const COLUMN_TIME_KEY: &str = "time_key";
pub const COLUMN_CUSTOMER_KEY: &str = "customer_key";
pub const COLUMN_PROMOTION_KEY: &str = "promotion_key";
pub const COLUMN_CHANNEL_KEY: &str = "channel_key";
pub const COLUMN_SHOWING_KEY: &str = "showing_key";
pub const COLUMN_TICKET_ID: &str = "ticket_id";
pub const COLUMN_TRANSACTION_ID: &str = "transaction_id";
pub const COLUMN_TICKET_PRICE: &str = "ticket_price";
pub const COLUMN_TICKET_COUNT: &str = "ticket_count";

/// Column order of the fact staging file and of the bulk copy statement.
pub const FACT_COLUMNS: [&str; 10] = [
    COLUMN_TICKET_ID,
    COLUMN_TRANSACTION_ID,
    COLUMN_DATE_KEY,
    COLUMN_TIME_KEY,
    COLUMN_CUSTOMER_KEY,
    COLUMN_PROMOTION_KEY,
    COLUMN_CHANNEL_KEY,
    COLUMN_SHOWING_KEY,
    COLUMN_TICKET_PRICE,
    COLUMN_TICKET_COUNT,
];

pub const STAGING_FILE_NAME: &str = "fact_ticket_sales.tsv";
