//! ヘッダー（ページ切り替え）

use crate::app::Page;
use leptos::prelude::*;

#[component]
pub fn Header(page: RwSignal<Page>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Garoo Admin"</h1>
            <nav class="nav">
                {Page::ALL
                    .into_iter()
                    .map(|p| {
                        view! {
                            <button
                                class="nav-link"
                                class:active=move || page.get() == p
                                on:click=move |_| page.set(p)
                            >
                                {p.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
