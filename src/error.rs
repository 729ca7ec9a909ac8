use minesweeper_common::state::NOT_FOUND_MESSAGE;
use minesweeper_common::QueryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinesweeperError {
    #[error("設定錯誤: {0}")]
    Config(String),

    #[error("{0}")]
    Query(#[from] QueryError),

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    /// 段階の接頭辞付きメッセージ（"搜尋失敗：..." など）
    #[error("{0}")]
    Api(String),

    #[error("URL錯誤: {0}")]
    Url(#[from] minesweeper_common::Error),

    #[error("HTTP客戶端錯誤: {0}")]
    Http(#[from] reqwest::Error),

    #[error("輸入錯誤: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON解析錯誤: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO錯誤: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MinesweeperError>;
