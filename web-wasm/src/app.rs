//! メインアプリケーションコンポーネント

use crate::components::{gallery::GalleryView, header::Header, workers::WorkersPage};
use leptos::prelude::*;

/// 表示中のページ
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Gallery,
    Workers,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Gallery, Page::Workers];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Gallery => "Galería",
            Page::Workers => "Reclutamiento",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let page = RwSignal::new(Page::Gallery);

    view! {
        <div class="container">
            <Header page=page />
            {move || match page.get() {
                Page::Gallery => view! { <GalleryView /> }.into_any(),
                Page::Workers => view! { <WorkersPage /> }.into_any(),
            }}
        </div>
    }
}
