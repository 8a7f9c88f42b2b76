//! HTTP routes for the stock list and the chat bot

use crate::error::{ApiError, ApiResult};
use crate::frontend;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use fincat_core::{ChatReply, ChatRequest, Command, Stock, execute};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

/// Build the application router around shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(serve_frontend))
        .route("/stocks", get(list_stocks).post(add_stock))
        .route("/stocks/{symbol}", put(update_stock).delete(delete_stock))
        .route("/chat", post(chat))
        .layer(cors)
        .with_state(state)
}

/// GET / - embedded single-page frontend
async fn serve_frontend() -> Html<&'static str> {
    Html(frontend::PAGE)
}

/// GET /stocks - current list of stocks
async fn list_stocks(State(state): State<AppState>) -> ApiResult<Json<Vec<Stock>>> {
    let stocks = state.read(|store| store.list())?;
    Ok(Json(stocks))
}

/// Direct CRUD bodies must satisfy the same invariants the chat interpreter
/// enforces.
fn validate(stock: &Stock) -> ApiResult<()> {
    if stock.symbol.is_empty() || !stock.symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ApiError::Invalid(
            "symbol must be non-empty and alphanumeric".to_string(),
        ));
    }
    if !stock.price.is_finite() || stock.price < 0.0 {
        return Err(ApiError::Invalid(
            "price must be a finite non-negative number".to_string(),
        ));
    }
    Ok(())
}

/// POST /stocks - add a stock directly
async fn add_stock(
    State(state): State<AppState>,
    Json(stock): Json<Stock>,
) -> ApiResult<Json<Stock>> {
    let stock = Stock {
        symbol: stock.symbol.to_uppercase(),
        ..stock
    };
    validate(&stock)?;

    let inserted = state.write(|store| store.insert(stock.clone()))?;
    if !inserted {
        debug!(symbol = %stock.symbol, "direct add rejected, symbol exists");
        return Err(ApiError::Conflict);
    }
    info!(symbol = %stock.symbol, "stock added");
    Ok(Json(stock))
}

/// PUT /stocks/{symbol} - replace an existing stock, keeping the symbol from
/// the path canonical
async fn update_stock(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Json(stock): Json<Stock>,
) -> ApiResult<Json<Stock>> {
    let stock = Stock {
        symbol: symbol.to_uppercase(),
        ..stock
    };
    validate(&stock)?;

    let replaced = state.write(|store| store.replace(&stock.symbol, stock.clone()))?;
    if !replaced {
        return Err(ApiError::NotFound);
    }
    info!(symbol = %stock.symbol, "stock replaced");
    Ok(Json(stock))
}

/// DELETE /stocks/{symbol} - remove a stock
async fn delete_stock(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<Value>> {
    let removed = state.write(|store| store.remove(&symbol))?;
    if !removed {
        return Err(ApiError::NotFound);
    }
    info!(symbol = %symbol.to_uppercase(), "stock removed");
    Ok(Json(json!({ "status": "ok" })))
}

/// POST /chat - run one chat command against the store
///
/// Always replies 200: unrecognized commands, conflicts, and missing targets
/// are reported in the reply string alongside the current snapshot.
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<Json<ChatReply>> {
    let command = Command::parse(&request.message);
    debug!(?command, "chat command");
    let reply = state.write(|store| execute(command, store))?;
    Ok(Json(reply))
}
