//! 検索 → 候補選択 → 分析 の端末版
//!
//! 読み込み中メッセージと失敗時の文言はWeb版と共通。

use std::time::Duration;

use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use minesweeper_common::state::{ANALYZING_MESSAGE, SEARCHING_MESSAGE};
use minesweeper_common::{AnalysisResult, Candidate, Phase, Query};

use crate::client::BackendClient;
use crate::error::{MinesweeperError, Result};

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// 検索。0件なら `NotFound`
pub async fn search(client: &BackendClient, query: &Query) -> Result<Vec<Candidate>> {
    let pb = spinner(SEARCHING_MESSAGE);
    let result = client.search(query).await;
    pb.finish_and_clear();

    match result {
        Ok(candidates) if candidates.is_empty() => Err(MinesweeperError::NotFound),
        Ok(candidates) => Ok(candidates),
        Err(e) => Err(MinesweeperError::Api(e.user_message(Phase::Search))),
    }
}

pub async fn analyze(client: &BackendClient, place_id: &str) -> Result<AnalysisResult> {
    let pb = spinner(ANALYZING_MESSAGE);
    let result = client.analyze(place_id).await;
    pb.finish_and_clear();

    result.map_err(|e| MinesweeperError::Api(e.user_message(Phase::Analyze)))
}

/// 候補の一覧表示用の1行
pub fn candidate_label(candidate: &Candidate) -> String {
    format!("{}  ({})", candidate.name, candidate.address)
}

/// 対話的に一通り実行し、選ばれた地点の分析結果を返す
pub async fn run_interactive(client: &BackendClient, query: Option<String>) -> Result<AnalysisResult> {
    let raw = match query {
        Some(q) => q,
        None => Input::<String>::new()
            .with_prompt("地點名稱")
            .allow_empty(true)
            .interact_text()?,
    };
    let query = Query::parse(&raw)?;

    let candidates = search(client, &query).await?;
    let labels: Vec<String> = candidates.iter().map(candidate_label).collect();
    let index = Select::new()
        .with_prompt("請選擇要分析的地點")
        .items(&labels)
        .default(0)
        .interact()?;

    let candidate = &candidates[index];
    tracing::debug!(place_id = %candidate.place_id, name = %candidate.name, "candidate selected");
    analyze(client, &candidate.place_id).await
}
