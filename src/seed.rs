use crate::database::{MovieDb, Store, StoreResult, UserDb};
use crate::model::*;

const MOVIES: &[(&str, i32, bool)] = &[
    ("Avengers Endgame", 2019, true),
    ("Interstellar", 2007, true),
    ("Superbad", 2009, true),
    ("The Matrix", 1999, false),
    ("Spirited Away", 2001, false),
];

/// Fills an empty store with a few users and movies.
pub fn seed(store: &Store) -> StoreResult<()> {
    for &(name, year_of_publication, is_in_theaters) in MOVIES {
        store.insert_movie(NewMovie {
            name: name.to_owned(),
            year_of_publication,
            is_in_theaters,
        })?;
    }

    let user = |name: &str, username: &str, age, nationality, friends: Vec<u64>| NewUser {
        name: name.to_owned(),
        username: username.to_owned(),
        age,
        nationality,
        friends,
    };
    let john = store.insert_user(user("John", "john", 20, Nationality::Ca, vec![]))?;
    let sarah = store.insert_user(user("Sarah", "sarah23", 22, Nationality::Uk, vec![john.id]))?;
    store.insert_user(user("Rafe", "rafe123", 20, Nationality::Au, vec![john.id, sarah.id]))?;
    store.insert_user(user("Kelly", "kelly2019", 5, Nationality::Us, vec![]))?;

    log::info!("seeded {} movies and 4 users", MOVIES.len());
    Ok(())
}
