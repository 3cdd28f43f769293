//! The stock collection endpoint

use axum::Json;
use axum::extract::{Path, State};
use stockchat_core::{PipelineStatus, StockState};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// `GET /stock/:symbol` - run one collection and return the full record
///
/// All-or-nothing: a record is only returned once the pipeline reports
/// `complete` and every slot is occupied. Slots holding a failure sentinel
/// are valid complete data; only structural inconsistency is an error.
pub async fn get_stock(
    State(app): State<AppState>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<StockState>> {
    let symbol = symbol.trim().to_uppercase();
    if !is_valid_symbol(&symbol) {
        return Err(ApiError::BadRequest(format!(
            "'{symbol}' is not a ticker symbol"
        )));
    }

    let report = app.pipeline.run(&symbol).await;
    validate_report(&report)?;
    Ok(Json(report))
}

fn is_valid_symbol(symbol: &str) -> bool {
    !symbol.is_empty()
        && symbol.len() <= 10
        && symbol
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

/// Structural checks on a finished run
///
/// An empty slot after completion means the pipeline itself misbehaved and is
/// reported as an internal error, distinct from a per-field failure sentinel.
fn validate_report(report: &StockState) -> Result<(), ApiError> {
    if report.status != PipelineStatus::Complete {
        return Err(ApiError::Internal("pipeline did not complete".to_string()));
    }
    if !report.all_slots_filled() {
        return Err(ApiError::Internal("incomplete data returned".to_string()));
    }
    Ok(())
}
