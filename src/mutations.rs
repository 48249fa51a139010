//! Handlers behind the user mutations.
//!
//! A missing target is reported as `Ok(None)`; only storage faults are errors.

use crate::database::UserDb;
use crate::model::*;
use log::{debug, info};

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub username: String,
    pub age: u32,
    pub nationality: Option<Nationality>,
}

#[derive(Debug, Clone)]
pub struct UpdateUsername {
    pub id: u64,
    pub new_username: String,
}

pub fn create_user<D: UserDb>(db: &D, input: CreateUser) -> Result<User, D::Error> {
    let user = db.insert_user(NewUser {
        name: input.name,
        username: input.username,
        age: input.age,
        nationality: input.nationality.unwrap_or_default(),
        friends: Vec::new(),
    })?;
    info!("created user {} ({})", user.id, user.username);
    Ok(user)
}

pub fn update_username<D: UserDb>(db: &D, input: UpdateUsername) -> Result<Option<User>, D::Error> {
    let patch = UserPatch {
        username: Some(input.new_username),
    };
    let user = db.update_user(input.id, patch)?;
    match &user {
        Some(user) => info!("renamed user {} to {}", user.id, user.username),
        None => debug!("update_username: no user {}", input.id),
    }
    Ok(user)
}

pub fn delete_user<D: UserDb>(db: &D, id: u64) -> Result<Option<User>, D::Error> {
    let user = db.remove_user(id)?;
    match &user {
        Some(user) => info!("deleted user {} ({})", user.id, user.username),
        None => debug!("delete_user: no user {}", id),
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Store;

    fn create(name: &str, username: &str, age: u32) -> CreateUser {
        CreateUser {
            name: name.to_owned(),
            username: username.to_owned(),
            age,
            nationality: None,
        }
    }

    #[test]
    fn create_user_on_empty_store() {
        let store = Store::temporary().unwrap();
        let user = create_user(&store, create("Al", "al1", 30)).unwrap();
        assert_eq!(
            user,
            User {
                id: 1,
                name: "Al".to_owned(),
                username: "al1".to_owned(),
                age: 30,
                nationality: Nationality::Uk,
                friends: Vec::new(),
            }
        );
        assert_eq!(store.find_user_by_id(1).unwrap(), Some(user));
    }

    #[test]
    fn create_user_keeps_nationality_and_duplicate_usernames() {
        let store = Store::temporary().unwrap();
        create_user(&store, create("Al", "same", 30)).unwrap();
        let mut input = create("Bo", "same", 25);
        input.nationality = Some(Nationality::Ca);
        let user = create_user(&store, input).unwrap();
        assert_eq!(user.id, 2);
        assert_eq!(user.nationality, Nationality::Ca);
        assert_eq!(store.list_users().unwrap().len(), 2);
    }

    #[test]
    fn update_username_on_missing_user_changes_nothing() {
        let store = Store::temporary().unwrap();
        create_user(&store, create("Al", "al1", 30)).unwrap();
        let before = store.list_users().unwrap();
        let result = update_username(
            &store,
            UpdateUsername {
                id: 99,
                new_username: "x".to_owned(),
            },
        )
        .unwrap();
        assert_eq!(result, None);
        assert_eq!(store.list_users().unwrap(), before);
    }

    #[test]
    fn update_username_replaces_only_the_username() {
        let store = Store::temporary().unwrap();
        let user = create_user(&store, create("Al", "al1", 30)).unwrap();
        let updated = update_username(
            &store,
            UpdateUsername {
                id: user.id,
                new_username: "al2".to_owned(),
            },
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            updated,
            User {
                username: "al2".to_owned(),
                ..user
            }
        );
    }

    #[test]
    fn delete_user_removes_exactly_one() {
        let store = Store::temporary().unwrap();
        for (name, username) in &[("A", "a"), ("B", "b"), ("C", "c")] {
            create_user(&store, create(name, username, 20)).unwrap();
        }
        let removed = delete_user(&store, 2).unwrap().unwrap();
        assert_eq!(removed.name, "B");
        let ids: Vec<u64> = store.list_users().unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert_eq!(delete_user(&store, 2).unwrap(), None);
        assert_eq!(store.list_users().unwrap().len(), 2);
    }
}
