//! バックエンドAPI呼び出し（fetch）
//!
//! ページと同じオリジンの `/search` と `/analyze` を叩く。
//! 応答の解釈は `minesweeper_common::decode_response` に任せる。

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use minesweeper_common::{
    decode_response, AnalysisResult, AnalyzeRequest, ApiError, Candidate, Endpoints, Phase, Query,
};

/// JS側の例外をTransportエラーに変換
fn js_error(value: JsValue) -> ApiError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::Transport(message)
}

fn window() -> Result<web_sys::Window, ApiError> {
    web_sys::window().ok_or_else(|| ApiError::Transport("window が取得できません".to_string()))
}

/// ページのオリジンを基準にしたエンドポイント
fn endpoints() -> Result<Endpoints, ApiError> {
    let origin = window()?.location().origin().map_err(js_error)?;
    Endpoints::new(&origin).map_err(|e| ApiError::Transport(e.to_string()))
}

/// リクエスト送信（共通処理）
async fn fetch_json<T: DeserializeOwned>(phase: Phase, request: &Request) -> Result<T, ApiError> {
    let resp_value = JsFuture::from(window()?.fetch_with_request(request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let status = resp.status();
    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text.as_string().unwrap_or_default();

    decode_response(phase, status, &body)
}

/// `GET /search?query=...`
pub async fn search(query: &Query) -> Result<Vec<Candidate>, ApiError> {
    let url = endpoints()?
        .search_url(query)
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    tracing::debug!(%url, "search");

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url.as_str(), &opts).map_err(js_error)?;
    fetch_json(Phase::Search, &request).await
}

/// `POST /analyze`
///
/// `place_name` はログ用。表示には応答の `place_name` を使う。
pub async fn analyze(place_id: &str, place_name: &str) -> Result<AnalysisResult, ApiError> {
    let url = endpoints()?
        .analyze_url()
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let body = AnalyzeRequest::new(place_id)
        .to_json()
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    tracing::debug!(%url, place_id, place_name, "analyze");

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url.as_str(), &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    fetch_json(Phase::Analyze, &request).await
}
