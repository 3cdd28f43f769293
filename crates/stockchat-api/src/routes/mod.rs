//! Route table

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

mod health;
mod stock;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/stock/:symbol", get(stock::get_stock))
}
