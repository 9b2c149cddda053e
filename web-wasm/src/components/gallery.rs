//! 画像ギャラリー（カード一覧 + モーダル）

use garoo_admin_common::{GalleryState, ImageRecord};
use leptos::prelude::*;

#[component]
pub fn GalleryView() -> impl IntoView {
    let state = RwSignal::new(GalleryState::default());
    let images = state.with_untracked(|s| s.images().to_vec());

    view! {
        <div class="gallery">
            <div class="gallery-grid">
                {images
                    .into_iter()
                    .map(|image| view! { <ImageCard image=image state=state /> })
                    .collect_view()}
            </div>

            <Show when=move || state.with(|s| s.is_modal_open())>
                <ImageModal state=state />
            </Show>
        </div>
    }
}

#[component]
fn ImageCard(image: ImageRecord, state: RwSignal<GalleryState>) -> impl IntoView {
    let title = image.title.clone();
    let url = image.url.clone();

    view! {
        <div
            class="card gallery-card"
            on:click=move |_| state.update(|s| s.select(image.clone()))
        >
            <img class="card-img-top" src=url alt=title.clone() />
            <div class="card-body">
                <h5 class="card-title">{title}</h5>
            </div>
        </div>
    }
}

#[component]
fn ImageModal(state: RwSignal<GalleryState>) -> impl IntoView {
    let selected = move || state.with(|s| s.selected().cloned());

    view! {
        <div class="modal-backdrop" on:click=move |_| state.update(|s| s.close())>
            <div class="modal-dialog" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h5 class="modal-title">
                        {move || selected().map(|img| img.title).unwrap_or_default()}
                    </h5>
                </div>
                <div class="modal-body">
                    {move || {
                        selected()
                            .map(|img| view! { <img class="img-fluid" src=img.url alt=img.title /> })
                    }}
                </div>
                <div class="modal-footer">
                    <button class="btn btn-secondary" on:click=move |_| state.update(|s| s.close())>
                        "Cerrar"
                    </button>
                </div>
            </div>
        </div>
    }
}
