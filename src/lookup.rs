//! Point lookups and predicate filters over entity collections.
//!
//! Everything here is a pure function over a snapshot; nothing mutates the
//! store.

use crate::model::{Movie, User};

pub trait Identified {
    fn id(&self) -> u64;
}

impl Identified for User {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Identified for Movie {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Coerces a textual identifier to a numeric one.
///
/// Surrounding whitespace is ignored and integral numbers written with a
/// fractional part (`"2.0"`) are accepted. Anything else yields `None`, which
/// callers treat as "not found".
pub fn parse_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<u64>() {
        return Some(id);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

/// First element whose id equals `id`.
pub fn find_by_id<T, I>(items: I, id: u64) -> Option<T>
where
    T: Identified,
    I: IntoIterator<Item = T>,
{
    items.into_iter().find(|item| item.id() == id)
}

/// First movie named exactly `name`. Names are not unique.
pub fn find_movie_by_name<I>(movies: I, name: &str) -> Option<Movie>
where
    I: IntoIterator<Item = Movie>,
{
    movies.into_iter().find(|movie| movie.name == name)
}

/// All elements matching `predicate`, in their original order.
pub fn filter<T, I, P>(items: I, mut predicate: P) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).collect()
}
