pub mod sistema;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub const SISTEMA_PATH: &str = "/api/sistema";

pub fn api_routes() -> Router<SharedState> {
    Router::new().route(SISTEMA_PATH, get(sistema::list).post(sistema::submit))
}
