//! 分析結果カードの表示モデル
//!
//! `AnalysisResult` から表示内容を決める純粋な変換。
//! Webのカードコンポーネントも端末出力もここを通す。

use std::fmt;

use serde_json::Value;

use crate::types::AnalysisResult;

pub const NEGATIVE_HEADING: &str = "踩雷關鍵評論";
pub const POSITIVE_HEADING: &str = "值得一提的優點";
pub const DETAILS_HEADING: &str = "詳細數據";
pub const TREND_CAPTION: &str = "(趨勢分數為負，代表近期評價有改善)";

/// 風険レベルの表示色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskColor {
    Green,
    Amber,
    Red,
}

impl RiskColor {
    /// 「中度風險」「高度風險」以外はすべて緑（未知の値もエラーにしない）
    pub fn for_level(risk_level: &str) -> Self {
        if risk_level == "中度風險" {
            RiskColor::Amber
        } else if risk_level == "高度風險" {
            RiskColor::Red
        } else {
            RiskColor::Green
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            RiskColor::Green => "#2ecc71",
            RiskColor::Amber => "#f39c12",
            RiskColor::Red => "#e74c3c",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskColor::Green => "green",
            RiskColor::Amber => "amber",
            RiskColor::Red => "red",
        }
    }
}

/// 踩雷分数を小数点以下1桁で表示
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// 詳細データの値を受け取ったまま表示する（丸めない）
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "N/A".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn decorate(phrase: &str) -> String {
    format!("“...{}...”", phrase)
}

fn section(items: &[String]) -> Option<Vec<String>> {
    if items.is_empty() {
        None
    } else {
        Some(items.iter().map(|s| decorate(s)).collect())
    }
}

/// 詳細データの1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: String,
}

/// 結果カードの内容（表示順）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultReport {
    pub heading: String,
    pub badge: String,
    pub color: RiskColor,
    pub risk_label: String,
    pub summary: String,
    /// 空なら見出しごと出さない
    pub negative_phrases: Option<Vec<String>>,
    pub positive_points: Option<Vec<String>>,
    pub details: Vec<DetailLine>,
}

impl From<&AnalysisResult> for ResultReport {
    fn from(result: &AnalysisResult) -> Self {
        let details = &result.details;
        Self {
            heading: result.place_name.clone(),
            badge: format_score(result.landmine_score),
            color: RiskColor::for_level(&result.risk_level),
            risk_label: result.risk_level.clone(),
            summary: format!("“{}”", result.summary),
            negative_phrases: section(&result.key_negative_keywords),
            positive_points: section(&result.positive_points),
            details: vec![
                DetailLine { label: "歷史平均評分", value: display_value(&details.historical_avg) },
                DetailLine { label: "近期平均評分", value: display_value(&details.recent_avg) },
                DetailLine { label: "總評論數", value: display_value(&details.total_reviews) },
                DetailLine { label: "趨勢分數", value: display_value(&details.trend_score) },
            ],
        }
    }
}

/// 端末向けのプレーンテキスト表示
impl fmt::Display for ResultReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        writeln!(f, "踩雷分數: {} ({})", self.badge, self.color.as_str())?;
        writeln!(f, "風險等級: {}", self.risk_label)?;
        writeln!(f, "{}", self.summary)?;

        for (heading, items) in [
            (NEGATIVE_HEADING, &self.negative_phrases),
            (POSITIVE_HEADING, &self.positive_points),
        ] {
            if let Some(items) = items {
                writeln!(f)?;
                writeln!(f, "{}", heading)?;
                for item in items {
                    writeln!(f, "  - {}", item)?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", DETAILS_HEADING)?;
        for line in &self.details {
            writeln!(f, "  {}: {}", line.label, line.value)?;
        }
        write!(f, "  {}", TREND_CAPTION)
    }
}
