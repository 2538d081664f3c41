use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prices {
    pub list_price: String,
    pub retail_price: String,
    pub buy_link: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    // No default for a missing upstream title: it stays null in the response.
    pub title: Option<String>,
    pub authors: String,
    pub isbn: String,
    pub description: String,
    pub cover_image: String,
    pub prices: Prices,
}
