mod support;

use chrono::NaiveDate;
use postgres::Client;
use reports::catalogue;
use reports::runner;
use reports::Runner;
use reports::REPORTS;
use tempfile::TempDir;
use warehouse_gen::dims::channels;
use warehouse_gen::dims::date;
use warehouse_gen::dims::promotions;
use warehouse_gen::dims::time;
use warehouse_gen::loader::insert_rows;
use warehouse_gen::schema;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Empty warehouse with calendar, promotions, channels, one customer and two
/// showings in Doha.
fn seed_warehouse(client: &mut Client) {
    schema::build(client).unwrap();
    insert_rows(client, &date::generate(ymd(2018, 1, 1), ymd(2018, 12, 31)).unwrap()).unwrap();
    insert_rows(client, &time::generate().unwrap()).unwrap();
    insert_rows(client, &promotions::generate()).unwrap();
    insert_rows(client, &channels::generate()).unwrap();
    client
        .batch_execute(
            "INSERT INTO dw.dim_customer (customer_id, name, dob, gender, address) \
             VALUES (1, 'Sara Haddad', '1990-05-01', 'F', 'Doha, Qatar');
             INSERT INTO dw.dim_showing (showing_id, showing_date, showing_time, showing_is_weekend, \
             showing_time_slot, hall_size_category, cinema_name, cinema_city, movie_title, director_name) \
             VALUES \
             (1, '2018-01-01', '18:00', false, 'AFTERNOON', 'MID', 'Cinema 01', 'Doha', 'Movie 0001', 'Greta Gerwig'), \
             (2, '2018-01-01', '20:00', false, 'NIGHT', 'MID', 'Cinema 02', 'Doha', 'Movie 0002', 'Greta Gerwig')",
        )
        .unwrap();
}

fn insert_fact(client: &mut Client, ticket_id: i64, date_key: i32, showing_key: i64, price: &str) {
    client
        .batch_execute(&format!(
            "INSERT INTO dw.fact_ticket_sales (ticket_id, transaction_id, date_key, time_key, \
             customer_key, promotion_key, channel_key, showing_key, ticket_price, ticket_count) \
             VALUES ({ticket_id}, {ticket_id}, {date_key}, 180000, 1, 1, 1, {showing_key}, {price}, 1)"
        ))
        .unwrap();
}

fn read_csv(path: &std::path::Path) -> Vec<Vec<String>> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.records()
        .map(|r| r.unwrap().iter().map(|v| v.to_string()).collect())
        .collect()
}

#[test]
#[ignore = "requires docker"]
fn test_city_rank_by_sales() {
    let (_container, dsn) = support::create_container();
    let mut client = support::connect(&dsn);
    seed_warehouse(&mut client);
    insert_fact(&mut client, 1, 20180301, 1, "200.00");
    insert_fact(&mut client, 2, 20180302, 1, "300.00");
    insert_fact(&mut client, 3, 20180303, 2, "300.00");

    let dir = TempDir::new().unwrap();
    let runner = Runner::try_new(dir.path(), 25).unwrap();
    let mut out = vec![];
    let path = runner
        .run_report(&mut client, &catalogue::Q11, &mut out)
        .unwrap();

    let rows = read_csv(&path);
    assert_eq!(rows, vec![
        vec!["Doha", "Cinema 01", "500.00", "1"],
        vec!["Doha", "Cinema 02", "300.00", "2"],
    ]);

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("=== Q11_city_rank_cinemas_sales_2018 ==="));
    assert!(out.contains("saved: "));
}

#[test]
#[ignore = "requires docker"]
fn test_four_week_moving_average() {
    let (_container, dsn) = support::create_container();
    let mut client = support::connect(&dsn);
    seed_warehouse(&mut client);
    // mondays of four consecutive weeks
    for (i, (date_key, price)) in [
        (20180101, "100.00"),
        (20180108, "200.00"),
        (20180115, "150.00"),
        (20180122, "250.00"),
    ]
    .into_iter()
    .enumerate()
    {
        insert_fact(&mut client, i as i64 + 1, date_key, 1, price);
    }

    let rs = runner::query(&mut client, catalogue::Q17.sql).unwrap();
    assert_eq!(rs.columns, vec!["week_start", "ma_4wk"]);
    assert_eq!(rs.len(), 3);
    let top = &rs.rows[0];
    assert_eq!(top[0].as_deref(), Some("2018-01-22"));
    let ma: f64 = top[1].as_deref().unwrap().parse().unwrap();
    assert!((ma - 175.0).abs() < 1e-9);

    let rs = runner::query(&mut client, catalogue::Q18.sql).unwrap();
    assert_eq!(rs.rows.len(), 1);
    let ma: f64 = rs.rows[0][1].as_deref().unwrap().parse().unwrap();
    assert!((ma - 175.0).abs() < 1e-9);
}

#[test]
#[ignore = "requires docker"]
fn test_run_all_on_empty_warehouse() {
    let (_container, dsn) = support::create_container();
    let mut client = support::connect(&dsn);
    seed_warehouse(&mut client);

    let dir = TempDir::new().unwrap();
    let runner = Runner::try_new(dir.path().join("outputs"), 5).unwrap();
    let mut out = vec![];
    let paths = runner.run_all(&mut client, &REPORTS, &mut out).unwrap();
    assert_eq!(paths.len(), 8);
    for (path, report) in paths.iter().zip(REPORTS.iter()) {
        assert!(path.ends_with(format!("{}.csv", report.name)));
        // header only
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }
}

#[test]
#[ignore = "requires docker"]
fn test_failure_aborts_batch() {
    let (_container, dsn) = support::create_container();
    let mut client = support::connect(&dsn);
    client.batch_execute("DROP SCHEMA IF EXISTS dw CASCADE").unwrap();

    let dir = TempDir::new().unwrap();
    let runner = Runner::try_new(dir.path(), 5).unwrap();
    let mut out = vec![];
    assert!(runner.run_all(&mut client, &REPORTS, &mut out).is_err());
    assert!(!runner.csv_path(&catalogue::Q12).exists());
}
