//! Purchase API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/purchases", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::place))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/delivery", put(handler::record_delivery))
}
