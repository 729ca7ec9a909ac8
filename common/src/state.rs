//! 画面状態
//!
//! 出力領域は常に一つの `UiState` で表され、遷移ごとに丸ごと置き換わる。
//! 非同期操作は `ViewState::begin` でチケットを受け取り、完了時に
//! `ViewState::settle` へ渡す。より新しい操作が始まっていれば結果は捨てる。

use crate::response::{ApiError, Phase};
use crate::types::{AnalysisResult, Candidate};

pub const SEARCHING_MESSAGE: &str = "正在搜尋地點...";
pub const ANALYZING_MESSAGE: &str = "分析中，請稍候... (首次分析可能需要較長時間抓取數據)";
pub const NOT_FOUND_MESSAGE: &str = "找不到相關地點，請嘗試更換關鍵字。";

/// 出力領域の状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UiState {
    #[default]
    Idle,
    Loading(String),
    Candidates(Vec<Candidate>),
    Error(String),
    Result(AnalysisResult),
}

impl UiState {
    /// 検索完了後の状態
    pub fn from_search(result: Result<Vec<Candidate>, ApiError>) -> Self {
        match result {
            Ok(candidates) if candidates.is_empty() => UiState::Error(NOT_FOUND_MESSAGE.to_string()),
            Ok(candidates) => UiState::Candidates(candidates),
            Err(e) => UiState::Error(e.user_message(Phase::Search)),
        }
    }

    /// 分析完了後の状態
    pub fn from_analysis(result: Result<AnalysisResult, ApiError>) -> Self {
        match result {
            Ok(analysis) => UiState::Result(analysis),
            Err(e) => UiState::Error(e.user_message(Phase::Analyze)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading(_))
    }
}

/// 非同期操作の識別子（単調増加）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// 状態コンテナ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    state: UiState,
    latest: Ticket,
}

impl ViewState {
    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn latest(&self) -> Ticket {
        self.latest
    }

    /// 新しい操作を開始してLoadingへ遷移する。以前の操作は無効になる
    pub fn begin(&mut self, message: impl Into<String>) -> Ticket {
        self.latest = Ticket(self.latest.0 + 1);
        self.state = UiState::Loading(message.into());
        self.latest
    }

    /// 操作の結果を反映する。古いチケットなら何もせずfalse
    pub fn settle(&mut self, ticket: Ticket, state: UiState) -> bool {
        if ticket != self.latest {
            return false;
        }
        self.state = state;
        true
    }
}
