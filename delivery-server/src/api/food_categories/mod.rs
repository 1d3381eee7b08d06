//! Food Category API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/food-categories", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        // Name lookup (must be before /{id} to avoid path conflicts)
        .route("/name/{name}", get(handler::get_by_name))
        .route(
            "/restaurant/{restaurant_id}",
            post(handler::create_in_restaurant),
        )
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
