//! 読み込み中・エラー表示

use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum StatusKind {
    Loading,
    Error,
}

#[component]
pub fn StatusMessage(message: String, kind: StatusKind) -> impl IntoView {
    let class = match kind {
        StatusKind::Loading => "status status-loading",
        StatusKind::Error => "status status-error",
    };

    view! {
        <div class=class>
            {(kind == StatusKind::Loading).then(|| view! { <span class="spinner"></span> })}
            <p>{message}</p>
        </div>
    }
}
