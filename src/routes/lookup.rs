use crate::models::responses::{ErrorResponse, LookupResult, Prices};
use crate::models::volumes::{Price, Volume};
use crate::services::google_books::{BooksClient, ClientError, SearchScope};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

type Backend = Arc<dyn BooksClient + Send + Sync>;

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    // An absent parameter folds into an empty string so both cases share
    // the same 400 response body.
    #[serde(default)]
    pub query: String,
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Query parameter required")]
    MissingQuery,
    #[error("No book found")]
    NotFound,
    #[error("Failed to fetch book info")]
    Upstream(#[source] ClientError),
    // Upstream reported a nonzero match count but sent no items. Collapsed
    // into the same generic failure class as transport and parse errors.
    #[error("Failed to fetch book info")]
    EmptyItems,
}

impl LookupError {
    fn status(&self) -> StatusCode {
        match self {
            LookupError::MissingQuery => StatusCode::BAD_REQUEST,
            LookupError::NotFound => StatusCode::NOT_FOUND,
            LookupError::Upstream(_) | LookupError::EmptyItems => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}

pub async fn lookup_book(
    Query(params): Query<LookupParams>,
    State(client): State<Backend>,
) -> Result<Json<LookupResult>, LookupError> {
    if params.query.is_empty() {
        return Err(LookupError::MissingQuery);
    }

    let scope = SearchScope::classify(&params.query);
    info!(
        "Lookup query {:?} classified as {}",
        params.query,
        scope.as_str()
    );

    let volumes = match client.search(scope, &params.query).await {
        Ok(volumes) => volumes,
        Err(e) => {
            error!("Failed to fetch volumes for {:?}: {}", params.query, e);
            return Err(LookupError::Upstream(e));
        }
    };

    if volumes.total_items == Some(0) {
        return Err(LookupError::NotFound);
    }

    // Only the first match is considered; no ranking or disambiguation.
    let volume = match volumes.items.into_iter().next() {
        Some(volume) => volume,
        None => {
            error!(
                "Upstream reported {:?} matches for {:?} but sent no items",
                volumes.total_items, params.query
            );
            return Err(LookupError::EmptyItems);
        }
    };

    Ok(Json(map_volume(&params.query, volume)))
}

// Defaults for missing upstream fields are all applied here.
fn map_volume(query: &str, volume: Volume) -> LookupResult {
    let info = volume.volume_info;
    let sale = volume.sale_info.unwrap_or_default();

    let authors = match info.authors {
        Some(authors) if !authors.is_empty() => authors.join(", "),
        _ => "Unknown".to_string(),
    };

    let isbn = info
        .industry_identifiers
        .unwrap_or_default()
        .into_iter()
        .find(|id| id.kind == "ISBN_13")
        .map(|id| id.identifier)
        .unwrap_or_else(|| query.to_string());

    LookupResult {
        title: info.title,
        authors,
        isbn,
        description: info
            .description
            .unwrap_or_else(|| "No description available".to_string()),
        cover_image: info
            .image_links
            .and_then(|links| links.thumbnail)
            .unwrap_or_default(),
        prices: Prices {
            list_price: format_price(sale.list_price),
            retail_price: format_price(sale.retail_price),
            buy_link: sale
                .buy_link
                .unwrap_or_else(|| "https://books.google.com".to_string()),
        },
    }
}

fn format_price(price: Option<Price>) -> String {
    match price {
        Some(price) => format!("{} {}", price.amount, price.currency_code),
        None => "N/A".to_string(),
    }
}
