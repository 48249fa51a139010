//! Fields derived from other collections on every read.

use crate::database::{MovieDb, UserDb};
use crate::lookup;
use crate::model::{Movie, User};
use std::ops::RangeInclusive;

pub const FAVOURITE_YEARS: RangeInclusive<i32> = 2000..=2010;

/// Favourite movies of `user`.
///
/// No per-user favourites are recorded anywhere, so every user gets the same
/// list: each stored movie published within `FAVOURITE_YEARS`, in store order.
pub fn favourite_movies<D: MovieDb>(db: &D, _user: &User) -> Result<Vec<Movie>, D::Error> {
    Ok(lookup::filter(db.list_movies()?, |movie| {
        FAVOURITE_YEARS.contains(&movie.year_of_publication)
    }))
}

/// Friends of `user` that still exist, in the stored order.
///
/// `None` when the user has no friends recorded.
pub fn friends<D: UserDb>(db: &D, user: &User) -> Result<Option<Vec<User>>, D::Error> {
    if user.friends.is_empty() {
        return Ok(None);
    }
    let users = db.list_users()?;
    Ok(Some(
        user.friends
            .iter()
            .filter_map(|id| lookup::find_by_id(users.iter().cloned(), *id))
            .collect(),
    ))
}
