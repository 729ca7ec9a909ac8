//! 候補リストコンポーネント

use leptos::prelude::*;
use minesweeper_common::Candidate;

#[component]
pub fn CandidateList<F>(
    candidates: Vec<Candidate>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(Candidate) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="candidate-list">
            <p class="candidate-hint">"請選擇要分析的地點："</p>
            {candidates
                .into_iter()
                .map(|candidate| {
                    let on_select = on_select.clone();
                    view! {
                        <button
                            class="candidate-item"
                            data-place-id=candidate.place_id.clone()
                            data-place-name=candidate.name.clone()
                            on:click={
                                let candidate = candidate.clone();
                                move |_| on_select(candidate.clone())
                            }
                        >
                            <strong>{candidate.name.clone()}</strong>
                            <small>{candidate.address.clone()}</small>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
