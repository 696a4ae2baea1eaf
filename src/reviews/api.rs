use gloo_net::http::{Request, Response};
use thiserror::Error;

use crate::config;
use crate::reviews::models::{Category, Review, ReviewSubmission, SubmitResponse};

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

pub fn reviews_url(category: Category) -> String {
    format!(
        "{}/api/reviews?type={}",
        config::get_backend_url(),
        category.query_value()
    )
}

pub fn submit_url() -> String {
    format!("{}/api/reviews", config::get_backend_url())
}

async fn ensure_ok(response: Response) -> Result<Response, ReviewError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ReviewError::Status { status, body })
}

/// Approved reviews of one category.
pub async fn fetch_reviews(category: Category) -> Result<Vec<Review>, ReviewError> {
    let response = Request::get(&reviews_url(category))
        .send()
        .await
        .map_err(|e| ReviewError::Network(e.to_string()))?;
    ensure_ok(response)
        .await?
        .json::<Vec<Review>>()
        .await
        .map_err(|e| ReviewError::Decode(e.to_string()))
}

pub async fn submit_review(submission: &ReviewSubmission) -> Result<SubmitResponse, ReviewError> {
    let request = Request::post(&submit_url())
        .json(submission)
        .map_err(|e| ReviewError::Encode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ReviewError::Network(e.to_string()))?;
    ensure_ok(response)
        .await?
        .json::<SubmitResponse>()
        .await
        .map_err(|e| ReviewError::Decode(e.to_string()))
}
