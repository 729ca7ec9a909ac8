//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Project MineSweeper - 美食地標防雷系統"</h1>
            <p class="text-muted">"輸入一個地點名稱，獲取其量化的踩雷分數與分析報告。"</p>
        </header>
    }
}
