use postgres::Client;
use postgres::NoTls;
use testcontainers::Container;
use testcontainers_modules::postgres as tc_postgres;
use testcontainers_modules::testcontainers::runners::SyncRunner;

/// Starts a throwaway Postgres and returns it with a libpq connection string.
pub fn create_container() -> (Container<tc_postgres::Postgres>, String) {
    let container = tc_postgres::Postgres::default()
        .with_db_name("warehouse")
        .with_user("postgres")
        .with_password("postgres")
        .start()
        .expect("start postgres container");

    let host = container.get_host().expect("container host");
    let port = container.get_host_port_ipv4(5432).expect("container port");
    let dsn = format!("host={host} port={port} user=postgres password=postgres dbname=warehouse");

    (container, dsn)
}

pub fn connect(dsn: &str) -> Client {
    Client::connect(dsn, NoTls).expect("connect")
}
