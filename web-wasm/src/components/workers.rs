//! 採用ページ（ワーカー一覧）
//!
//! Webhookの取得結果を一覧・検索し、詳細表示と履歴書PDF出力を行う。

use crate::api::webhook::trigger_webhook;
use crate::components::worker_modal::WorkerModal;
use crate::export::pdf_wasm::export_worker_pdf;
use garoo_admin_common::{WorkerDirectory, WorkerRecord, EXPORT_ERROR_MESSAGE};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 表示タブ
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Table,
    Raw,
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn export_pdf(record: &WorkerRecord) {
    match export_worker_pdf(record) {
        Ok(skipped) => {
            for s in skipped {
                web_sys::console::warn_1(
                    &format!("Error en la sección {}: {}", s.title, s.reason).into(),
                );
            }
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Error al generar el PDF: {}", e).into());
            alert(EXPORT_ERROR_MESSAGE);
        }
    }
}

#[component]
pub fn WorkersPage() -> impl IntoView {
    let state = RwSignal::new(WorkerDirectory::new());
    let (tab, set_tab) = signal(Tab::Table);

    let on_update = move |_| {
        // 取得中は無視
        if !state.try_update(|s| s.begin_fetch()).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let result = trigger_webhook().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Error en el componente: {}", e).into());
            }
            state.update(|s| s.finish_fetch(result));
        });
    };

    let loading = move || state.with(|s| s.is_loading());
    let visible = Signal::derive(move || state.with(|s| s.is_modal_open()));
    let selected = Signal::derive(move || state.with(|s| s.selected().cloned()));

    view! {
        <div class="card workers">
            <div class="card-header d-flex">
                <h4>"Trabajadores"</h4>
                <button class="btn btn-primary" on:click=on_update disabled=loading>
                    {move || if loading() {
                        view! { <span class="spinner-border spinner-border-sm"></span> " Procesando..." }.into_any()
                    } else {
                        view! { "Actualizar Datos" }.into_any()
                    }}
                </button>
            </div>

            {move || state.with(|s| s.error().cloned()).map(|err| view! {
                <div class="alert alert-danger">
                    <strong>"Error"</strong>
                    <p>{err.message}</p>
                </div>
            })}

            <ul class="nav nav-tabs">
                <li>
                    <button class="nav-link" class:active=move || tab.get() == Tab::Table
                        on:click=move |_| set_tab.set(Tab::Table)>"Tabla de Datos"</button>
                </li>
                <li>
                    <button class="nav-link" class:active=move || tab.get() == Tab::Raw
                        on:click=move |_| set_tab.set(Tab::Raw)>"Respuesta del servidor"</button>
                </li>
            </ul>

            {move || match tab.get() {
                Tab::Table => view! { <WorkerTable state=state /> }.into_any(),
                Tab::Raw => view! {
                    <pre class="raw-json">
                        {move || state.with(|s| s.raw_json().unwrap_or_else(|e| e.to_string()))}
                    </pre>
                }.into_any(),
            }}

            <WorkerModal
                visible=visible
                record=selected
                on_close=move || state.update(|s| s.close_details())
            />
        </div>
    }
}

#[component]
fn WorkerTable(state: RwSignal<WorkerDirectory>) -> impl IntoView {
    let rows = move || state.with(|s| s.rows());

    view! {
        <div class="search">
            <input
                type="text"
                class="form-control"
                placeholder="Buscar por nombre, puesto, nacionalidad..."
                prop:value=move || state.with(|s| s.search_term().to_string())
                on:input=move |ev| state.update(|s| s.set_search_term(event_target_value(&ev)))
            />
            <Show when=move || state.with(|s| !s.search_term().is_empty())>
                <button class="btn btn-outline-secondary" on:click=move |_| state.update(|s| s.clear_search())>
                    "Limpiar"
                </button>
            </Show>
            <span class="badge">{move || state.with(|s| s.result_count_label())}</span>
        </div>

        <table class="table table-striped table-hover">
            <thead>
                <tr>
                    <th>"#"</th>
                    <th>"Nombre Completo"</th>
                    <th>"Puesto"</th>
                    <th>"Nacionalidad"</th>
                    <th>"Disponibilidad"</th>
                    <th>"Pretención Salarial"</th>
                    <th>"Educación"</th>
                    <th>"Acciones"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=rows
                    key=|row| row.clone()
                    children=move |row| {
                        let index = row.record_index;
                        view! {
                            <tr>
                                <td>{row.number}</td>
                                <td>{row.full_name}</td>
                                <td>{row.position}</td>
                                <td>{row.nationality}</td>
                                <td>{row.availability}</td>
                                <td>{row.salary}</td>
                                <td>{row.education}</td>
                                <td>
                                    <button class="btn btn-sm btn-info"
                                        on:click=move |_| state.update(|s| { s.view_record(index); })>
                                        "Ver Detalles"
                                    </button>
                                    <button class="btn btn-sm btn-success"
                                        on:click=move |_| {
                                            let record = state.with_untracked(|s| s.record(index).cloned());
                                            if let Some(record) = record {
                                                export_pdf(&record);
                                            }
                                        }>
                                        "PDF"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
