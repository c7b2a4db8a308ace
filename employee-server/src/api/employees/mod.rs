//! Employee API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::AppState;

/// Employee router
///
/// The paths mirror the legacy surface: the collection listing and the
/// search live on their own prefixes, item routes sit under
/// `/employee/{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/employees", get(handler::list))
        .route("/employee", post(handler::create))
        .route(
            "/employee/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .delete(handler::delete),
        )
        .route("/findemployee/search", get(handler::search))
}
