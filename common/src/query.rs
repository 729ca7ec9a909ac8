//! 検索キーワードの検証

use std::fmt;
use thiserror::Error;

/// 空入力時に表示する通知
pub const EMPTY_QUERY_NOTICE: &str = "請輸入地點名稱！";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("{}", EMPTY_QUERY_NOTICE)]
    Empty,
}

/// 検証済みの検索キーワード（前後の空白を除去済み・空でない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
