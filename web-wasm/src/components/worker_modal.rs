//! ワーカー詳細モーダル

use garoo_admin_common::directory::detail_entries;
use garoo_admin_common::WorkerRecord;
use leptos::prelude::*;

#[component]
pub fn WorkerModal<F>(
    visible: Signal<bool>,
    record: Signal<Option<WorkerRecord>>,
    on_close: F,
) -> impl IntoView
where
    F: Fn() + Clone + Send + Sync + 'static,
{
    let close_backdrop = on_close.clone();
    let close_button = on_close;

    view! {
        <Show when=move || visible.get()>
            <div class="modal-backdrop" on:click={
                let close = close_backdrop.clone();
                move |_| close()
            }>
                <div class="modal-dialog modal-lg" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h5 class="modal-title">"Detalles del Trabajador"</h5>
                    </div>
                    <div class="modal-body">
                        <table class="table table-sm">
                            <tbody>
                                {move || {
                                    record
                                        .get()
                                        .map(|r| detail_entries(&r))
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|(key, value)| view! {
                                            <tr>
                                                <th>{key}</th>
                                                <td>{value}</td>
                                            </tr>
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                    </div>
                    <div class="modal-footer">
                        <button class="btn btn-secondary" on:click={
                            let close = close_button.clone();
                            move |_| close()
                        }>
                            "Cerrar"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
