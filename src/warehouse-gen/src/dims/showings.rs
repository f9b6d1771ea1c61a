use chrono::Duration;
use chrono::NaiveDate;
use chrono::NaiveTime;
use common::types::TABLE_DIM_SHOWING;
use postgres::types::ToSql;
use rand::Rng;
use rust_decimal::Decimal;

use crate::calendar;
use crate::dims::customers::random_date;
use crate::dims::DimensionRow;
use crate::error::Result;
use crate::error::WarehouseGenError;
use crate::vocab;

pub const CINEMAS: u64 = 60;
pub const MOVIES: u64 = 800;
pub const STAR_PROBABILITY: f64 = 0.03;

const MIN_MOVIE_COST_CENTS: i64 = 1_000_000 * 100;
const MAX_MOVIE_COST_CENTS: i64 = 250_000_000 * 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cinema {
    pub id: i64,
    pub name: String,
    pub city: &'static str,
    pub state: &'static str,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Director {
    pub name: &'static str,
    pub dob: NaiveDate,
    pub gender: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub language: &'static str,
    pub release_date: NaiveDate,
    pub cost: Decimal,
    pub country: &'static str,
    pub director: Director,
    pub genre: &'static str,
    pub cast: String,
}

impl Movie {
    pub fn has_star(&self) -> bool {
        self.cast.contains(vocab::STAR)
    }
}

pub struct CinemaProvider {
    pub cinemas: Vec<Cinema>,
}

impl CinemaProvider {
    pub fn generate<R: Rng>(rng: &mut R, n: u64) -> Self {
        let cinemas = (1..=n as i64)
            .map(|id| {
                let (city, state) = *vocab::pick(rng, &vocab::CITIES);
                Cinema {
                    id,
                    name: format!("Cinema {id:02}"),
                    city,
                    state,
                    address: format!("{} Main St, {city}", rng.gen_range(1..=199)),
                }
            })
            .collect();

        Self { cinemas }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> &Cinema {
        vocab::pick(rng, &self.cinemas)
    }
}

pub struct MovieProvider {
    pub movies: Vec<Movie>,
}

impl MovieProvider {
    pub fn generate<R: Rng>(rng: &mut R, n: u64) -> Result<Self> {
        let mut directors = Vec::with_capacity(vocab::DIRECTORS.len());
        for (name, (y, m, d), gender) in vocab::DIRECTORS {
            let dob = NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| {
                WarehouseGenError::Internal(format!("invalid director dob {y}-{m}-{d}"))
            })?;
            directors.push(Director { name, dob, gender });
        }

        let mut movies = Vec::with_capacity(n as usize);
        for id in 1..=n as i64 {
            let director = vocab::pick(rng, &directors).clone();
            let cast = if rng.gen::<f64>() < STAR_PROBABILITY {
                format!("{}, {}", vocab::STAR, vocab::random_name(rng))
            } else {
                let lead = vocab::random_name(rng);
                format!("{lead}, {}", vocab::random_name(rng))
            };
            let language = *vocab::pick(rng, &vocab::LANGUAGES);
            let release_date = random_date(rng, 2000..=2026)?;
            let cost = Decimal::new(
                rng.gen_range(MIN_MOVIE_COST_CENTS..=MAX_MOVIE_COST_CENTS),
                2,
            );

            movies.push(Movie {
                id,
                title: format!("Movie {id:04}"),
                language,
                release_date,
                cost,
                country: *vocab::pick(rng, &vocab::COUNTRIES),
                director,
                genre: *vocab::pick(rng, &vocab::GENRES),
                cast,
            });
        }

        Ok(Self { movies })
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> &Movie {
        vocab::pick(rng, &self.movies)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowingRow {
    pub showing_id: i64,
    pub showing_date: NaiveDate,
    pub showing_time: NaiveTime,
    pub showing_is_weekend: bool,
    pub showing_time_slot: &'static str,

    pub hall_id: i64,
    pub hall_size: i32,
    pub hall_size_category: &'static str,

    pub cinema_id: i64,
    pub cinema_name: String,
    pub cinema_address: String,
    pub cinema_city: &'static str,
    pub cinema_state: &'static str,

    pub movie_id: i64,
    pub movie_title: String,
    pub movie_language: &'static str,
    pub movie_release_date: NaiveDate,
    pub movie_cost: Decimal,
    pub movie_country: &'static str,

    pub director_id: Option<i64>,
    pub director_name: &'static str,
    pub director_dob: NaiveDate,
    pub director_gender: &'static str,

    pub genre_name: &'static str,
    pub cast_list: String,
    pub has_omar_sharif: bool,
}

impl ShowingRow {
    pub fn new(
        showing_id: i64,
        date: NaiveDate,
        time: NaiveTime,
        hall_id: i64,
        hall_size: i32,
        cinema: &Cinema,
        movie: &Movie,
    ) -> Self {
        Self {
            showing_id,
            showing_date: date,
            showing_time: time,
            showing_is_weekend: calendar::is_weekend(date),
            showing_time_slot: calendar::time_slot(time).into(),
            hall_id,
            hall_size,
            hall_size_category: calendar::hall_size_category(hall_size).into(),
            cinema_id: cinema.id,
            cinema_name: cinema.name.clone(),
            cinema_address: cinema.address.clone(),
            cinema_city: cinema.city,
            cinema_state: cinema.state,
            movie_id: movie.id,
            movie_title: movie.title.clone(),
            movie_language: movie.language,
            movie_release_date: movie.release_date,
            movie_cost: movie.cost,
            movie_country: movie.country,
            director_id: None,
            director_name: movie.director.name,
            director_dob: movie.director.dob,
            director_gender: movie.director.gender,
            genre_name: movie.genre,
            cast_list: movie.cast.clone(),
            has_omar_sharif: movie.has_star(),
        }
    }
}

impl DimensionRow for ShowingRow {
    const TABLE: &'static str = TABLE_DIM_SHOWING;
    const COLUMNS: &'static [&'static str] = &[
        "showing_id",
        "showing_date",
        "showing_time",
        "showing_is_weekend",
        "showing_time_slot",
        "hall_id",
        "hall_size",
        "hall_size_category",
        "cinema_id",
        "cinema_name",
        "cinema_address",
        "cinema_city",
        "cinema_state",
        "movie_id",
        "movie_title",
        "movie_language",
        "movie_release_date",
        "movie_cost",
        "movie_country",
        "director_id",
        "director_name",
        "director_dob",
        "director_gender",
        "genre_name",
        "cast_list",
        "has_omar_sharif",
    ];

    fn values(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.showing_id,
            &self.showing_date,
            &self.showing_time,
            &self.showing_is_weekend,
            &self.showing_time_slot,
            &self.hall_id,
            &self.hall_size,
            &self.hall_size_category,
            &self.cinema_id,
            &self.cinema_name,
            &self.cinema_address,
            &self.cinema_city,
            &self.cinema_state,
            &self.movie_id,
            &self.movie_title,
            &self.movie_language,
            &self.movie_release_date,
            &self.movie_cost,
            &self.movie_country,
            &self.director_id,
            &self.director_name,
            &self.director_dob,
            &self.director_gender,
            &self.genre_name,
            &self.cast_list,
            &self.has_omar_sharif,
        ]
    }
}

pub struct Config<'a> {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub showings: u64,
    pub cinemas: &'a CinemaProvider,
    pub movies: &'a MovieProvider,
}

/// Showings start between 10:00 and 23:55 on a 5 minute grid.
pub fn generate<R: Rng>(rng: &mut R, cfg: Config) -> Result<Vec<ShowingRow>> {
    if cfg.start > cfg.end {
        return Err(WarehouseGenError::InvalidDateRange(cfg.start, cfg.end));
    }
    if cfg.cinemas.cinemas.is_empty() {
        return Err(WarehouseGenError::EmptyPool("cinemas"));
    }
    if cfg.movies.movies.is_empty() {
        return Err(WarehouseGenError::EmptyPool("movies"));
    }

    let span_days = (cfg.end - cfg.start).num_days();
    let mut rows = Vec::with_capacity(cfg.showings as usize);
    for showing_id in 1..=cfg.showings as i64 {
        let date = cfg.start + Duration::days(rng.gen_range(0..=span_days));
        let hour = rng.gen_range(10..=23);
        let minute = *vocab::pick(rng, &vocab::SHOWING_MINUTES);
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            WarehouseGenError::Internal(format!("invalid showing time {hour}:{minute}"))
        })?;
        let cinema = cfg.cinemas.sample(rng);
        let hall_id = rng.gen_range(1..=500);
        let hall_size = rng.gen_range(40..=260);
        let movie = cfg.movies.sample(rng);

        rows.push(ShowingRow::new(
            showing_id, date, time, hall_id, hall_size, cinema, movie,
        ));
    }

    Ok(rows)
}
