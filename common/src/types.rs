//! API契約の型定義
//!
//! `/search` と `/analyze` がやり取りするJSONをそのまま表す型:
//! - Candidate: 検索候補（ユーザーが選ぶ前の地点）
//! - AnalyzeRequest: `/analyze` のリクエストボディ
//! - AnalysisResult: 踩雷分析の結果
//! - ErrorBody: 非2xx応答のボディ

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 検索候補
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// バックエンドが発行する不透明なID
    pub place_id: String,
    pub name: String,
    pub address: String,
}

/// `/analyze` リクエストボディ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub place_id: String,
}

impl AnalyzeRequest {
    pub fn new(place_id: impl Into<String>) -> Self {
        Self {
            place_id: place_id.into(),
        }
    }

    /// `{"place_id":"..."}` 形式の文字列
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// 踩雷分析結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub place_name: String,
    pub landmine_score: f64,
    /// 「低度風險」「中度風險」「高度風險」。未知の値もそのまま保持する
    pub risk_level: String,
    pub summary: String,

    #[serde(default)]
    pub key_negative_keywords: Vec<String>, // 負面片語

    #[serde(default)]
    pub positive_points: Vec<String>,       // 正面片語

    pub details: AnalysisDetails,
}

/// 詳細データ
///
/// 各値は表示用にそのまま使う。バックエンドは数値のほか
/// `"N/A"` のような文字列を送ってくることがある。
/// 4項目とも必須（明示的な `null` は受け付ける）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDetails {
    pub historical_avg: Value,
    pub recent_avg: Value,
    pub total_reviews: Value,
    pub trend_score: Value,

    /// 星評価ごとの件数（oneStar, twoStar, ...）
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub reviews_distribution: Map<String, Value>,
}

/// エラー応答ボディ
///
/// `detail` は通常は文字列だが、入力検証エラー（422）では
/// `{"loc": [...], "msg": "...", "type": "..."}` の配列になる。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// 表示用メッセージ。取り出せなければNone
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            _ => None,
        }
    }
}
