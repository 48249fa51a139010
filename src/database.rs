use crate::model::*;
use parking_lot::RwLock;
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),
    #[error("encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

// Big endian keeps tree order equal to numeric id order.
fn serialize_id(id: u64) -> [u8; 8] {
    id.to_be_bytes()
}

fn deserialize_id<V: AsRef<[u8]>>(id: V) -> Option<u64> {
    use std::convert::TryInto;
    id.as_ref().try_into().ok().map(u64::from_be_bytes)
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> StoreResult<T> {
    Ok(bincode::deserialize(bytes)?)
}

fn encode<T: Serialize>(value: &T) -> StoreResult<Vec<u8>> {
    Ok(bincode::serialize(value)?)
}

/// Next id for `tree`: one past the largest stored id, or 1 for an empty tree.
///
/// Callers must hold the store's write guard, otherwise two inserts can
/// observe the same maximum.
fn next_id(tree: &sled::Tree) -> StoreResult<u64> {
    Ok(tree
        .last()?
        .and_then(|(key, _)| deserialize_id(key))
        .map_or(1, |max| max + 1))
}

fn scan<T: DeserializeOwned>(tree: &sled::Tree) -> StoreResult<Vec<T>> {
    tree.iter()
        .values()
        .map(|value| decode(&value?))
        .collect()
}

pub trait UserDb {
    type Error;
    fn list_users(&self) -> Result<Vec<User>, Self::Error>;
    fn insert_user(&self, user: NewUser) -> Result<User, Self::Error>;
    fn find_user_by_id(&self, id: u64) -> Result<Option<User>, Self::Error>;
    fn update_user(&self, id: u64, patch: UserPatch) -> Result<Option<User>, Self::Error>;
    fn remove_user(&self, id: u64) -> Result<Option<User>, Self::Error>;
}

pub trait MovieDb {
    type Error;
    fn list_movies(&self) -> Result<Vec<Movie>, Self::Error>;
    fn insert_movie(&self, movie: NewMovie) -> Result<Movie, Self::Error>;
}

const USERS: &[u8] = b"users";
const MOVIES: &[u8] = b"movies";

/// Owner of the user and movie collections.
///
/// All writes, id allocation included, run under one store-wide write guard.
/// Reads share the read guard, so they never observe a half-applied write.
pub struct Store {
    users: sled::Tree,
    movies: sled::Tree,
    lock: RwLock<()>,
    _db: sled::Db,
}

impl Store {
    pub fn open(db: sled::Db) -> StoreResult<Store> {
        Ok(Store {
            users: db.open_tree(USERS)?,
            movies: db.open_tree(MOVIES)?,
            lock: RwLock::new(()),
            _db: db,
        })
    }

    /// A store whose backing files are removed when it is dropped.
    pub fn temporary() -> StoreResult<Store> {
        Store::open(sled::Config::new().temporary(true).open()?)
    }
}

impl UserDb for Store {
    type Error = StoreError;

    fn list_users(&self) -> StoreResult<Vec<User>> {
        let _guard = self.lock.read();
        scan(&self.users)
    }

    fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let _guard = self.lock.write();
        let user = user.with_id(next_id(&self.users)?);
        self.users.insert(serialize_id(user.id), encode(&user)?)?;
        Ok(user)
    }

    fn find_user_by_id(&self, id: u64) -> StoreResult<Option<User>> {
        let _guard = self.lock.read();
        self.users
            .get(serialize_id(id))?
            .map(|data| decode(&data))
            .transpose()
    }

    fn update_user(&self, id: u64, patch: UserPatch) -> StoreResult<Option<User>> {
        let _guard = self.lock.write();
        let key = serialize_id(id);
        let mut user: User = match self.users.get(key)? {
            Some(data) => decode(&data)?,
            None => return Ok(None),
        };
        patch.apply(&mut user);
        self.users.insert(key, encode(&user)?)?;
        Ok(Some(user))
    }

    fn remove_user(&self, id: u64) -> StoreResult<Option<User>> {
        let _guard = self.lock.write();
        self.users
            .remove(serialize_id(id))?
            .map(|data| decode(&data))
            .transpose()
    }
}

impl MovieDb for Store {
    type Error = StoreError;

    fn list_movies(&self) -> StoreResult<Vec<Movie>> {
        let _guard = self.lock.read();
        scan(&self.movies)
    }

    fn insert_movie(&self, movie: NewMovie) -> StoreResult<Movie> {
        let _guard = self.lock.write();
        let movie = movie.with_id(next_id(&self.movies)?);
        self.movies.insert(serialize_id(movie.id), encode(&movie)?)?;
        Ok(movie)
    }
}
