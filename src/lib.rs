//! 美食地標防雷系統 - 端末クライアント
//!
//! Web版と同じ `/search` → 候補選択 → `/analyze` の流れを端末で実行する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod workflow;
