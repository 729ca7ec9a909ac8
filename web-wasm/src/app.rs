//! メインアプリケーションコンポーネント
//!
//! 検索 → 候補選択 → 分析 の3段階を制御する。出力領域の内容は
//! `ViewState` 一つで決まり、各非同期操作は完了時に状態遷移を渡すだけ。

use leptos::prelude::*;
use leptos::task::spawn_local;
use minesweeper_common::state::{ANALYZING_MESSAGE, SEARCHING_MESSAGE};
use minesweeper_common::{Candidate, Query, ResultReport, Ticket, UiState, ViewState};

use crate::api::backend;
use crate::components::{
    candidate_list::CandidateList,
    header::Header,
    result_card::ResultCard,
    search_bar::SearchBar,
    status_message::{StatusKind, StatusMessage},
};

/// 完了した操作の扱われ方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Settled {
    Applied,
    /// 新しい操作に追い越された
    Superseded { latest: Ticket },
    /// 応答が届く前に画面が破棄された
    Disposed,
}

/// 操作結果を反映（新しい操作が始まっていれば捨てる）
fn settle(view_state: RwSignal<ViewState>, ticket: Ticket, state: UiState) -> Settled {
    let outcome = view_state.try_update(|v| {
        if v.settle(ticket, state) {
            Settled::Applied
        } else {
            Settled::Superseded { latest: v.latest() }
        }
    });
    match outcome {
        Some(Settled::Superseded { latest }) => {
            tracing::debug!(?ticket, ?latest, "superseded response discarded");
            Settled::Superseded { latest }
        }
        Some(settled) => settled,
        None => {
            tracing::debug!(?ticket, "view disposed before response arrived");
            Settled::Disposed
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let view_state = RwSignal::new(ViewState::default());

    // 候補選択ハンドラ
    let on_select = move |candidate: Candidate| {
        let Some(ticket) = view_state.try_update(|v| v.begin(ANALYZING_MESSAGE)) else {
            return;
        };
        spawn_local(async move {
            let result = backend::analyze(&candidate.place_id, &candidate.name).await;
            if let Err(e) = &result {
                tracing::warn!(place_id = %candidate.place_id, status = ?e.status(), error = %e, "analyze failed");
            }
            settle(view_state, ticket, UiState::from_analysis(result));
        });
    };

    // 検索ハンドラ
    let on_search = move |_: ()| {
        let query = match Query::parse(&query.get_untracked()) {
            Ok(query) => query,
            Err(e) => {
                gloo::dialogs::alert(&e.to_string());
                return;
            }
        };
        let Some(ticket) = view_state.try_update(|v| v.begin(SEARCHING_MESSAGE)) else {
            return;
        };
        spawn_local(async move {
            let result = backend::search(&query).await;
            if let Err(e) = &result {
                tracing::warn!(%query, status = ?e.status(), error = %e, "search failed");
            }
            settle(view_state, ticket, UiState::from_search(result));
        });
    };

    view! {
        <div class="container">
            <Header />

            <SearchBar query=query set_query=set_query on_search=on_search />

            <div
                id="results"
                class="results"
                aria-busy=move || view_state.with(|v| v.state().is_loading().to_string())
            >
                {move || match view_state.with(|v| v.state().clone()) {
                    UiState::Idle => ().into_any(),
                    UiState::Loading(message) => view! {
                        <StatusMessage message=message kind=StatusKind::Loading />
                    }.into_any(),
                    UiState::Error(message) => view! {
                        <StatusMessage message=message kind=StatusKind::Error />
                    }.into_any(),
                    UiState::Candidates(candidates) => view! {
                        <CandidateList candidates=candidates on_select=on_select />
                    }.into_any(),
                    UiState::Result(result) => view! {
                        <ResultCard report=ResultReport::from(&result) />
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
