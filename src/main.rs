mod config;
mod database;
mod lookup;
mod model;
mod mutations;
mod relations;
mod schema;
mod seed;

use actix_web::{error, middleware::Logger, web, App, HttpResponse, HttpServer};
use async_graphql::http::GraphiQLSource;
use config::Config;
use database::Store;
use log::{debug, info};
use schema::{build_schema, MovieGraphSchema};
use std::sync::Arc;

type Schema = web::Data<MovieGraphSchema>;

fn log_error<E: std::fmt::Debug>(err: E, message: &'static str) -> error::Error {
    debug!("{:?}", err);
    error::ErrorInternalServerError(message)
}

async fn graphql(schema: Schema, request: web::Json<async_graphql::Request>) -> HttpResponse {
    let response = schema.execute(request.into_inner()).await;
    HttpResponse::Ok().json(response)
}

async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/graphql", web::post().to(graphql))
        .route("/graphql", web::get().to(graphiql));
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("moviegraph=debug,actix_web=info"),
    )
    .init();

    let config = Config::from_env();
    let store = Store::temporary().map_err(|err| {
        std::io::Error::new(std::io::ErrorKind::Other, format!("opening store: {}", err))
    })?;
    if config.seed {
        seed::seed(&store).map_err(|err| {
            std::io::Error::new(std::io::ErrorKind::Other, format!("seeding store: {}", err))
        })?;
    }
    let schema = build_schema(Arc::new(store));

    info!("GraphQL endpoint at http://{}/graphql", config.bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(schema.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                log_error(err, "Malformed GraphQL request")
            }))
            .configure(routes)
    })
    .bind(&config.bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use serde_json::{json, Value};

    #[actix_rt::test]
    async fn serves_queries_over_http() {
        let store = Store::temporary().unwrap();
        seed::seed(&store).unwrap();
        let schema = build_schema(Arc::new(store));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(schema))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(json!({"query": r#"{ movie(name: "Interstellar") { yearOfPublication isInTheaters } }"#}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            json!({"data": {"movie": {"yearOfPublication": 2007, "isInTheaters": true}}})
        );

        let req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(json!({
                "query": "mutation Create($input: CreateUserInput!) { createUser(input: $input) { id nationality } }",
                "variables": {"input": {"name": "Al", "username": "al1", "age": 30}}
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"data": {"createUser": {"id": "5", "nationality": "UK"}}}));
    }

    #[actix_rt::test]
    async fn serves_graphiql() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_schema(Arc::new(Store::temporary().unwrap()))))
                .configure(routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/graphql").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
