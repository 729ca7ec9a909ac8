//! 分析結果カードコンポーネント

use leptos::prelude::*;
use minesweeper_common::report::{
    ResultReport, DETAILS_HEADING, NEGATIVE_HEADING, POSITIVE_HEADING, TREND_CAPTION,
};

#[component]
pub fn ResultCard(report: ResultReport) -> impl IntoView {
    let color = report.color.css();
    let badge_class = format!("score-badge risk-{}", report.color.as_str());
    let ResultReport {
        heading,
        badge,
        risk_label,
        summary,
        negative_phrases,
        positive_points,
        details,
        ..
    } = report;

    view! {
        <div class="result-card">
            <h2 class="place-name">{heading}</h2>
            <div
                class=badge_class
                style=format!("border-color: {}; color: {};", color, color)
            >
                {badge}
            </div>
            <p class="risk-level" style=format!("color: {};", color)>{risk_label}</p>
            <p class="summary">{summary}</p>

            {negative_phrases.map(|items| view! {
                <PhraseSection heading=NEGATIVE_HEADING items=items kind="negative" />
            })}
            {positive_points.map(|items| view! {
                <PhraseSection heading=POSITIVE_HEADING items=items kind="positive" />
            })}

            <div class="details">
                <h3>{DETAILS_HEADING}</h3>
                <ul>
                    {details
                        .into_iter()
                        .map(|line| view! {
                            <li>
                                <span class="detail-label">{line.label}</span>
                                ": "
                                <span class="detail-value">{line.value}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
                <p class="caption">{TREND_CAPTION}</p>
            </div>
        </div>
    }
}

#[component]
fn PhraseSection(heading: &'static str, items: Vec<String>, kind: &'static str) -> impl IntoView {
    view! {
        <div class=format!("phrases phrases-{}", kind)>
            <h3>{heading}</h3>
            <ul>
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </div>
    }
}
