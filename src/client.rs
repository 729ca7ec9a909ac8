//! バックエンドHTTPクライアント

use std::time::Duration;

use minesweeper_common::{
    decode_response, AnalysisResult, AnalyzeRequest, ApiError, Candidate, Endpoints, Phase, Query,
};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::Result;

fn transport(e: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(e.to_string())
}

pub struct BackendClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl BackendClient {
    pub fn new(config: &Config) -> Result<Self> {
        let endpoints = Endpoints::new(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        tracing::debug!(base = %endpoints.base(), timeout = config.timeout_seconds, "backend client");
        Ok(Self { http, endpoints })
    }

    /// `GET /search?query=...`
    pub async fn search(&self, query: &Query) -> std::result::Result<Vec<Candidate>, ApiError> {
        let url = self.endpoints.search_url(query).map_err(transport)?;
        tracing::debug!(%url, "search");

        let response = self.http.get(url).send().await.map_err(transport)?;
        Self::decode(Phase::Search, response).await
    }

    /// `POST /analyze`
    pub async fn analyze(&self, place_id: &str) -> std::result::Result<AnalysisResult, ApiError> {
        let url = self.endpoints.analyze_url().map_err(transport)?;
        tracing::debug!(%url, place_id, "analyze");

        let response = self
            .http
            .post(url)
            .json(&AnalyzeRequest::new(place_id))
            .send()
            .await
            .map_err(transport)?;
        Self::decode(Phase::Analyze, response).await
    }

    async fn decode<T: DeserializeOwned>(
        phase: Phase,
        response: reqwest::Response,
    ) -> std::result::Result<T, ApiError> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;
        let result = decode_response(phase, status, &body);
        match &result {
            Err(e) if e.status().is_some() => tracing::warn!(status, error = %e, "backend returned an error"),
            Err(e) => tracing::warn!(status, error = %e, "response could not be decoded"),
            Ok(_) => tracing::debug!(status, "response decoded"),
        }
        result
    }
}
