//! Route table.
//!
//! Book routes and directory routes (users, permission groups, departments) are
//! separate groups so either one can be switched off from configuration.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use orgdocs_persistence::core::DocumentStore;
use tracing::info;

use crate::handlers::{self, Books, Departments, PermissionGroups, Resource};
use crate::state::AppState;

/// Creates all routes enabled by the configuration.
///
/// # Routes
///
/// ## Operational
/// - `GET /health`, `GET /_liveness`, `GET /_readiness`
///
/// ## Books (`enable_books`)
/// - `GET /books`
/// - `GET /book/{id}`
/// - `POST /book/create`
/// - `PUT /book/update/{id}`
/// - `DELETE /book/delete/{id}`
///
/// ## Directory (`enable_directory`)
/// - `GET|POST /user`, `GET /user/{id}`, `PUT /user/update/{id}`, `DELETE /user/delete/{id}`
/// - the same shape under `/permission` and `/department`
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: DocumentStore + 'static,
{
    let mut router = Router::new()
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>));

    if state.config().enable_books {
        info!("Mounting book routes");
        router = router.merge(book_routes::<S>());
    }

    if state.config().enable_directory {
        info!("Mounting directory routes");
        router = router
            .merge(user_routes::<S>())
            .merge(directory_routes::<S, PermissionGroups>("permission"))
            .merge(directory_routes::<S, Departments>("department"));
    }

    router.with_state(state)
}

fn book_routes<S>() -> Router<AppState<S>>
where
    S: DocumentStore + 'static,
{
    Router::new()
        .route("/books", get(handlers::list_handler::<S, Books>))
        .route("/book/create", post(handlers::create_handler::<S, Books>))
        .route("/book/{id}", get(handlers::read_handler::<S, Books>))
        .route("/book/update/{id}", put(handlers::update_handler::<S, Books>))
        .route("/book/delete/{id}", delete(handlers::delete_handler::<S, Books>))
}

fn user_routes<S>() -> Router<AppState<S>>
where
    S: DocumentStore + 'static,
{
    Router::new()
        .route(
            "/user",
            get(handlers::list_users_handler::<S>).post(handlers::create_user_handler::<S>),
        )
        .route("/user/{id}", get(handlers::read_user_handler::<S>))
        .route("/user/update/{id}", put(handlers::update_user_handler::<S>))
        .route("/user/delete/{id}", delete(handlers::delete_user_handler::<S>))
}

/// Routes for a generic directory resource mounted at `/<prefix>`.
fn directory_routes<S, R>(prefix: &str) -> Router<AppState<S>>
where
    S: DocumentStore + 'static,
    R: Resource,
{
    Router::new()
        .route(
            &format!("/{prefix}"),
            get(handlers::list_handler::<S, R>).post(handlers::create_handler::<S, R>),
        )
        .route(
            &format!("/{prefix}/{{id}}"),
            get(handlers::read_handler::<S, R>),
        )
        .route(
            &format!("/{prefix}/update/{{id}}"),
            put(handlers::update_handler::<S, R>),
        )
        .route(
            &format!("/{prefix}/delete/{{id}}"),
            delete(handlers::delete_handler::<S, R>),
        )
}
