//! 検索バーコンポーネント

use leptos::prelude::*;

#[component]
pub fn SearchBar<F>(
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
    on_search: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="search-bar">
            <input
                type="text"
                id="place-input"
                placeholder="輸入餐廳或地點名稱..."
                prop:value=move || query.get()
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                }
                on:keydown={
                    let on_search = on_search.clone();
                    move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.is_composing() {
                            on_search(());
                        }
                    }
                }
            />
            <button
                id="search-btn"
                class="btn btn-primary"
                on:click={
                    let on_search = on_search.clone();
                    move |_| on_search(())
                }
            >
                "搜尋"
            </button>
        </div>
    }
}
