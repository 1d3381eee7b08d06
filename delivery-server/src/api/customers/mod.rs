//! Customer API module

mod handler;

use axum::{
    Router,
    routing::get,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/customers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        // Name lookup (must be before /{id} to avoid path conflicts)
        .route("/name/{name}", get(handler::get_by_name))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
}
