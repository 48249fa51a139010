use async_graphql::Enum;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, Enum)]
pub enum Nationality {
    #[default]
    #[graphql(name = "UK")]
    Uk,
    #[graphql(name = "US")]
    Us,
    #[graphql(name = "CA")]
    Ca,
    #[graphql(name = "AU")]
    Au,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub age: u32,
    pub nationality: Nationality,
    /// Ids of other users, in display order.
    pub friends: Vec<u64>,
}

/// A user that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub age: u32,
    pub nationality: Nationality,
    pub friends: Vec<u64>,
}

impl NewUser {
    pub fn with_id(self, id: u64) -> User {
        User {
            id,
            name: self.name,
            username: self.username,
            age: self.age,
            nationality: self.nationality,
            friends: self.friends,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: u64,
    pub name: String,
    pub year_of_publication: i32,
    pub is_in_theaters: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub name: String,
    pub year_of_publication: i32,
    pub is_in_theaters: bool,
}

impl NewMovie {
    pub fn with_id(self, id: u64) -> Movie {
        Movie {
            id,
            name: self.name,
            year_of_publication: self.year_of_publication,
            is_in_theaters: self.is_in_theaters,
        }
    }
}

/// Field-level changes applied by `UserDb::update_user`. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
}

impl UserPatch {
    pub fn apply(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
    }
}
