#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Also the file stem of the exported CSV.
    pub name: &'static str,
    pub sql: &'static str,
}

pub const CITY_RANK_CINEMAS_SALES_2018: &str = r#"
WITH city_cinema_sales AS (
  SELECT
    s.cinema_city,
    s.cinema_name,
    SUM(f.ticket_price) AS total_sales_2018
  FROM dw.fact_ticket_sales f
  JOIN dw.dim_date d    ON d.date_key = f.date_key
  JOIN dw.dim_showing s ON s.showing_key = f.showing_key
  WHERE d.year_num = 2018
  GROUP BY s.cinema_city, s.cinema_name
)
SELECT
  cinema_city,
  cinema_name,
  total_sales_2018,
  RANK() OVER (PARTITION BY cinema_city ORDER BY total_sales_2018 DESC) AS sales_rank
FROM city_cinema_sales
ORDER BY cinema_city, sales_rank, cinema_name
"#;

pub const DIRECTOR_RANK_MOVIES_SALES_UNDER40: &str = r#"
WITH base AS (
  SELECT
    s.director_name,
    s.movie_title,
    SUM(f.ticket_price) AS total_sales,
    COUNT(*) AS tickets_sold
  FROM dw.fact_ticket_sales f
  JOIN dw.dim_date d      ON d.date_key = f.date_key
  JOIN dw.dim_customer c  ON c.customer_key = f.customer_key
  JOIN dw.dim_showing s   ON s.showing_key = f.showing_key
  WHERE c.dob IS NOT NULL
    AND EXTRACT(YEAR FROM age(d.full_date, c.dob))::INT < 40
  GROUP BY s.director_name, s.movie_title
)
SELECT
  director_name,
  movie_title,
  total_sales,
  tickets_sold,
  RANK() OVER (PARTITION BY director_name ORDER BY total_sales DESC) AS movie_rank
FROM base
ORDER BY director_name, movie_rank, movie_title
"#;

pub const CITY_RANK_BROWSERS_ONLINE_TX: &str = r#"
WITH base AS (
  SELECT
    s.cinema_city,
    ch.browser_name,
    COUNT(DISTINCT f.transaction_id) AS tx_count
  FROM dw.fact_ticket_sales f
  JOIN dw.dim_channel ch  ON ch.channel_key = f.channel_key
  JOIN dw.dim_showing s   ON s.showing_key = f.showing_key
  WHERE ch.channel_type = 'ONLINE'
  GROUP BY s.cinema_city, ch.browser_name
)
SELECT
  cinema_city,
  browser_name,
  tx_count,
  RANK() OVER (PARTITION BY cinema_city ORDER BY tx_count DESC) AS browser_rank
FROM base
ORDER BY cinema_city, browser_rank, browser_name
"#;

pub const TOP10_MOVIES_2018_BY_GENDER: &str = r#"
WITH base AS (
  SELECT
    c.gender,
    s.movie_title,
    COUNT(*) AS tickets_sold
  FROM dw.fact_ticket_sales f
  JOIN dw.dim_date d     ON d.date_key = f.date_key
  JOIN dw.dim_customer c ON c.customer_key = f.customer_key
  JOIN dw.dim_showing s  ON s.showing_key = f.showing_key
  WHERE d.year_num = 2018
    AND c.gender IN ('M','F')
  GROUP BY c.gender, s.movie_title
),
ranked AS (
  SELECT
    gender,
    movie_title,
    tickets_sold,
    DENSE_RANK() OVER (PARTITION BY gender ORDER BY tickets_sold DESC) AS rnk
  FROM base
)
SELECT gender, movie_title, tickets_sold
FROM ranked
WHERE rnk <= 10
ORDER BY gender, tickets_sold DESC, movie_title
"#;

pub const CITY_TOP5_CINEMAS_TICKETS_2014_2018: &str = r#"
WITH base AS (
  SELECT
    s.cinema_city,
    s.cinema_name,
    COUNT(*) AS tickets_sold
  FROM dw.fact_ticket_sales f
  JOIN dw.dim_date d    ON d.date_key = f.date_key
  JOIN dw.dim_showing s ON s.showing_key = f.showing_key
  WHERE d.year_num BETWEEN 2014 AND 2018
  GROUP BY s.cinema_city, s.cinema_name
),
ranked AS (
  SELECT
    cinema_city,
    cinema_name,
    tickets_sold,
    DENSE_RANK() OVER (PARTITION BY cinema_city ORDER BY tickets_sold DESC) AS rnk
  FROM base
)
SELECT cinema_city, cinema_name, tickets_sold
FROM ranked
WHERE rnk <= 5
ORDER BY cinema_city, tickets_sold DESC, cinema_name
"#;

pub const WEEKLY_8WK_MOVING_AVG_SALES_2018: &str = r#"
WITH weekly AS (
  SELECT
    d.week_start_date AS week_start,
    SUM(f.ticket_price) AS week_sales
  FROM dw.fact_ticket_sales f
  JOIN dw.dim_date d ON d.date_key = f.date_key
  WHERE d.year_num = 2018
  GROUP BY d.week_start_date
),
ma AS (
  SELECT
    week_start,
    week_sales,
    AVG(week_sales) OVER (ORDER BY week_start ROWS BETWEEN 7 PRECEDING AND CURRENT ROW) AS ma_8wk
  FROM weekly
)
SELECT week_start, week_sales, ma_8wk
FROM ma
ORDER BY week_start
"#;

pub const TOP3_4WK_MOVING_AVG_SALES_2018: &str = r#"
WITH weekly AS (
  SELECT
    d.week_start_date AS week_start,
    SUM(f.ticket_price) AS week_sales
  FROM dw.fact_ticket_sales f
  JOIN dw.dim_date d ON d.date_key = f.date_key
  WHERE d.year_num = 2018
  GROUP BY d.week_start_date
),
ma AS (
  SELECT
    week_start,
    AVG(week_sales) OVER (ORDER BY week_start ROWS BETWEEN 3 PRECEDING AND CURRENT ROW) AS ma_4wk
  FROM weekly
)
SELECT week_start, ma_4wk
FROM ma
ORDER BY ma_4wk DESC
LIMIT 3
"#;

pub const CITY_MAX_4WK_MOVING_AVG_SALES_2010_2018: &str = r#"
WITH weekly_city AS (
  SELECT
    s.cinema_city,
    d.week_start_date AS week_start,
    SUM(f.ticket_price) AS week_sales
  FROM dw.fact_ticket_sales f
  JOIN dw.dim_date d    ON d.date_key = f.date_key
  JOIN dw.dim_showing s ON s.showing_key = f.showing_key
  WHERE d.year_num BETWEEN 2010 AND 2018
  GROUP BY s.cinema_city, d.week_start_date
),
ma AS (
  SELECT
    cinema_city,
    week_start,
    AVG(week_sales) OVER (PARTITION BY cinema_city ORDER BY week_start ROWS BETWEEN 3 PRECEDING AND CURRENT ROW) AS ma_4wk
  FROM weekly_city
),
mx AS (
  SELECT cinema_city, MAX(ma_4wk) AS max_ma_4wk
  FROM ma
  GROUP BY cinema_city
)
SELECT cinema_city, max_ma_4wk
FROM mx
ORDER BY max_ma_4wk DESC, cinema_city
"#;

pub const Q11: Report = Report {
    name: "Q11_city_rank_cinemas_sales_2018",
    sql: CITY_RANK_CINEMAS_SALES_2018,
};

pub const Q12: Report = Report {
    name: "Q12_director_rank_movies_sales_under40",
    sql: DIRECTOR_RANK_MOVIES_SALES_UNDER40,
};

pub const Q13: Report = Report {
    name: "Q13_city_rank_browsers_online_tx",
    sql: CITY_RANK_BROWSERS_ONLINE_TX,
};

pub const Q14: Report = Report {
    name: "Q14_top10_movies_2018_by_gender",
    sql: TOP10_MOVIES_2018_BY_GENDER,
};

pub const Q15: Report = Report {
    name: "Q15_city_top5_cinemas_tickets_2014_2018",
    sql: CITY_TOP5_CINEMAS_TICKETS_2014_2018,
};

pub const Q16: Report = Report {
    name: "Q16_weekly_8wk_moving_avg_sales_2018",
    sql: WEEKLY_8WK_MOVING_AVG_SALES_2018,
};

pub const Q17: Report = Report {
    name: "Q17_top3_4wk_moving_avg_sales_2018",
    sql: TOP3_4WK_MOVING_AVG_SALES_2018,
};

pub const Q18: Report = Report {
    name: "Q18_city_max_4wk_moving_avg_sales_2010_2018",
    sql: CITY_MAX_4WK_MOVING_AVG_SALES_2010_2018,
};

/// Reports in execution order.
pub static REPORTS: [Report; 8] = [Q11, Q12, Q13, Q14, Q15, Q16, Q17, Q18];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    #[test]
    fn test_catalogue_order() {
        let names: Vec<_> = REPORTS.iter().map(|r| &r.name[..3]).collect();
        assert_eq!(names, vec![
            "Q11", "Q12", "Q13", "Q14", "Q15", "Q16", "Q17", "Q18"
        ]);
        let unique: HashSet<_> = REPORTS.iter().map(|r| r.name).collect();
        assert_eq!(unique.len(), REPORTS.len());
    }

    #[test]
    fn test_reports_only_read() {
        for r in REPORTS {
            let sql = r.sql.trim_start();
            assert!(sql.starts_with("WITH") || sql.starts_with("SELECT"));
            for kw in ["INSERT", "UPDATE", "DELETE", "DROP", "CREATE"] {
                assert!(!sql.contains(kw), "{} contains {kw}", r.name);
            }
            assert!(!sql.trim_end().ends_with(';'));
        }
    }

    #[rstest]
    #[case(Q11, "RANK() OVER (PARTITION BY cinema_city ORDER BY total_sales_2018 DESC)")]
    #[case(Q12, "EXTRACT(YEAR FROM age(d.full_date, c.dob))::INT < 40")]
    #[case(Q13, "COUNT(DISTINCT f.transaction_id)")]
    #[case(Q14, "WHERE rnk <= 10")]
    #[case(Q15, "WHERE rnk <= 5")]
    #[case(Q16, "ROWS BETWEEN 7 PRECEDING AND CURRENT ROW")]
    #[case(Q17, "ROWS BETWEEN 3 PRECEDING AND CURRENT ROW")]
    #[case(Q17, "LIMIT 3")]
    #[case(Q18, "PARTITION BY cinema_city ORDER BY week_start ROWS BETWEEN 3 PRECEDING AND CURRENT ROW")]
    #[case(Q18, "BETWEEN 2010 AND 2018")]
    fn test_report_contracts(#[case] report: Report, #[case] fragment: &str) {
        assert!(report.sql.contains(fragment), "{}", report.name);
    }
}
