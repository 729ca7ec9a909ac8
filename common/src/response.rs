//! HTTP応答の解釈
//!
//! 2xxならボディを目的の型にデコードし、それ以外は `detail` を
//! 取り出してエラーにする。WebとCLIで同じ規則を使う。

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::types::ErrorBody;

/// ワークフローの段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Search,
    Analyze,
}

impl Phase {
    /// 出力領域に表示するエラーの接頭辞
    pub fn failure_prefix(&self) -> &'static str {
        match self {
            Phase::Search => "搜尋失敗：",
            Phase::Analyze => "分析失敗：",
        }
    }

    /// `detail` が無いときのメッセージ
    pub fn server_error(&self, status: u16) -> String {
        match self {
            Phase::Search => format!("搜尋伺服器錯誤: {}", status),
            Phase::Analyze => format!("分析伺服器錯誤: {}", status),
        }
    }
}

/// API呼び出しエラー
///
/// Displayは接頭辞なしのメッセージ本体。
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    /// 段階の接頭辞付きメッセージ（例: "搜尋失敗：..."）
    pub fn user_message(&self, phase: Phase) -> String {
        format!("{}{}", phase.failure_prefix(), self)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// ステータスとボディ文字列から結果を取り出す
pub fn decode_response<T: DeserializeOwned>(
    phase: Phase,
    status: u16,
    body: &str,
) -> Result<T, ApiError> {
    if !is_success(status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message())
            .unwrap_or_else(|| phase.server_error(status));
        return Err(ApiError::Status { status, message });
    }

    Ok(serde_json::from_str(body)?)
}
