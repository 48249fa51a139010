//! GraphQL schema: object types, inputs and the query/mutation roots.
//!
//! Arguments arrive already coerced by async-graphql (`age` is a non-negative
//! integer, `nationality` one of the enum values). Textual ids are converted
//! here; an unparsable id resolves like an unknown one.

use crate::database::{MovieDb, Store, UserDb};
use crate::lookup;
use crate::model::*;
use crate::mutations;
use crate::relations;
use async_graphql::{Context, EmptySubscription, InputObject, Object, Result, Schema, ID};
use log::debug;
use std::sync::Arc;

pub type MovieGraphSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<Store>) -> MovieGraphSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn store<'a>(ctx: &Context<'a>) -> Result<&'a Store> {
    Ok(ctx.data::<Arc<Store>>()?.as_ref())
}

fn to_id(id: u64) -> ID {
    ID(id.to_string())
}

pub struct UserObject(User);

#[Object(name = "User")]
impl UserObject {
    async fn id(&self) -> ID {
        to_id(self.0.id)
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn username(&self) -> &str {
        &self.0.username
    }

    async fn age(&self) -> u32 {
        self.0.age
    }

    async fn nationality(&self) -> Nationality {
        self.0.nationality
    }

    async fn friends(&self, ctx: &Context<'_>) -> Result<Option<Vec<UserObject>>> {
        let friends = relations::friends(store(ctx)?, &self.0)?;
        Ok(friends.map(|users| users.into_iter().map(UserObject).collect()))
    }

    async fn favourite_movies(&self, ctx: &Context<'_>) -> Result<Vec<MovieObject>> {
        let movies = relations::favourite_movies(store(ctx)?, &self.0)?;
        Ok(movies.into_iter().map(MovieObject).collect())
    }
}

pub struct MovieObject(Movie);

#[Object(name = "Movie")]
impl MovieObject {
    async fn id(&self) -> ID {
        to_id(self.0.id)
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn year_of_publication(&self) -> i32 {
        self.0.year_of_publication
    }

    async fn is_in_theaters(&self) -> bool {
        self.0.is_in_theaters
    }
}

#[derive(InputObject)]
pub struct CreateUserInput {
    pub name: String,
    pub username: String,
    pub age: u32,
    /// Defaults to `UK` when omitted.
    pub nationality: Option<Nationality>,
}

#[derive(InputObject)]
pub struct UpdateUsernameInput {
    pub id: ID,
    pub new_username: String,
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<UserObject>> {
        let users = store(ctx)?.list_users()?;
        Ok(users.into_iter().map(UserObject).collect())
    }

    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<UserObject>> {
        let id = match lookup::parse_id(&id) {
            Some(id) => id,
            None => {
                debug!("user: unparsable id {:?}", id.as_str());
                return Ok(None);
            }
        };
        Ok(store(ctx)?.find_user_by_id(id)?.map(UserObject))
    }

    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<MovieObject>> {
        let movies = store(ctx)?.list_movies()?;
        Ok(movies.into_iter().map(MovieObject).collect())
    }

    async fn movie(&self, ctx: &Context<'_>, name: String) -> Result<Option<MovieObject>> {
        let movies = store(ctx)?.list_movies()?;
        Ok(lookup::find_movie_by_name(movies, &name).map(MovieObject))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(&self, ctx: &Context<'_>, input: CreateUserInput) -> Result<UserObject> {
        let input = mutations::CreateUser {
            name: input.name,
            username: input.username,
            age: input.age,
            nationality: input.nationality,
        };
        Ok(UserObject(mutations::create_user(store(ctx)?, input)?))
    }

    async fn update_username(
        &self,
        ctx: &Context<'_>,
        input: UpdateUsernameInput,
    ) -> Result<Option<UserObject>> {
        let id = match lookup::parse_id(&input.id) {
            Some(id) => id,
            None => return Ok(None),
        };
        let input = mutations::UpdateUsername {
            id,
            new_username: input.new_username,
        };
        Ok(mutations::update_username(store(ctx)?, input)?.map(UserObject))
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<UserObject>> {
        let id = match lookup::parse_id(&id) {
            Some(id) => id,
            None => return Ok(None),
        };
        Ok(mutations::delete_user(store(ctx)?, id)?.map(UserObject))
    }
}
