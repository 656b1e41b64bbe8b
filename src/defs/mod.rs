pub mod genre;

pub use self::genre::{DEFAULT_ATMOSPHERE, GENRES, GenreInfo, by_name};
