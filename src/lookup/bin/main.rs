use axum::{
    routing::get,
    Router,
};
use lambda_http::{run, Error};
use book_lookup::core::controller::AppState;
use book_lookup::core::domain::Configuration;
use book_lookup::core::repository::RepositoryStore;
use book_lookup::lookup::controller::{find_all_books, find_book_by_author, find_book_by_name};
use book_lookup::lookup::factory::create_lookup_service;
use book_lookup::utils::ddb::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/images-test.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = if DEV_MODE {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
        Configuration::from_env("dev", RepositoryStore::LocalDynamoDB)
    } else {
        Configuration::from_env("prod", RepositoryStore::DynamoDB)
    };
    tracing::info!(branch = config.branch_id.as_str(), store = ?config.store,
        authors = config.supported_authors.len(), "starting catalog lookup");

    let svc = create_lookup_service(&config).await?;
    let state = AppState::new(config, svc);

    let app = Router::new()
        .route("/books", get(find_all_books))
        .route("/books/:name", get(find_book_by_name))
        .route("/authors/:author/book", get(find_book_by_author))
        .with_state(state);

    run(app).await
}
