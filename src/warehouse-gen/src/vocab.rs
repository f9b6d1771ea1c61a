//! Fixed vocabularies the dimension generators draw attribute values from.

use rand::Rng;

pub const FIRST_NAMES: [&str; 14] = [
    "Ali", "Omar", "Sara", "Mona", "Yousef", "Khalid", "Noor", "Huda", "Adam", "Lina", "Zain",
    "Mariam", "Hassan", "Rami",
];

pub const LAST_NAMES: [&str; 12] = [
    "Khan", "Haddad", "Saleh", "Nasser", "Fahad", "Farouk", "Gamal", "Said", "Aziz", "Rahman",
    "Hussein", "Mahmoud",
];

pub const GENDERS: [&str; 3] = ["M", "F", "Other"];

pub const TOWNS: [&str; 6] = [
    "Doha",
    "Al Wakrah",
    "Al Rayyan",
    "Al Khor",
    "Lusail",
    "Umm Salal",
];

pub const CITIES: [(&str, &str); 9] = [
    ("Doha", "Qatar"),
    ("Al Rayyan", "Qatar"),
    ("Al Wakrah", "Qatar"),
    ("Dubai", "UAE"),
    ("Abu Dhabi", "UAE"),
    ("Riyadh", "KSA"),
    ("Jeddah", "KSA"),
    ("Manama", "Bahrain"),
    ("Kuwait City", "Kuwait"),
];

pub const GENRES: [&str; 8] = [
    "Action",
    "Drama",
    "Comedy",
    "Sci-Fi",
    "Romance",
    "Thriller",
    "Animation",
    "Horror",
];

pub const LANGUAGES: [&str; 5] = ["English", "Arabic", "Hindi", "French", "Japanese"];

pub const COUNTRIES: [&str; 7] = ["USA", "UK", "Egypt", "Qatar", "India", "France", "Japan"];

/// Name, date of birth `(y, m, d)` and gender.
pub const DIRECTORS: [(&str, (i32, u32, u32), &str); 5] = [
    ("Mohamed Khan", (1942, 10, 26), "M"),
    ("Nadine Labaki", (1974, 2, 18), "F"),
    ("Christopher Nolan", (1970, 7, 30), "M"),
    ("Hayao Miyazaki", (1941, 1, 5), "M"),
    ("Greta Gerwig", (1983, 8, 4), "F"),
];

/// Cast member whose presence is surfaced as a flag on every showing.
pub const STAR: &str = "Omar Sharif";

pub const SHOWING_MINUTES: [u32; 12] = [0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55];

pub fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

pub fn random_name<R: Rng>(rng: &mut R) -> String {
    let first = pick(rng, &FIRST_NAMES);
    let last = pick(rng, &LAST_NAMES);
    format!("{first} {last}")
}
