#[cfg(not(target_arch = "wasm32"))]
use leptos::*;

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn FormsPage() -> impl IntoView {
    view! { <div>"Form management available in browser build."</div> }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::FormsPage;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use crate::download::{save_bytes, PDF_MIME, XLSX_MIME};
    use crate::state::{use_app_ctx, use_toasts};
    use api_client::{delete_form, fetch_excel_export, fetch_form_pdf, fetch_forms};
    use forms_core::{apply, remove_record, FilterSet, FormRecord, SortOrder};
    use leptos::*;
    use wasm_bindgen_futures::spawn_local;

    #[component]
    pub fn FormsPage() -> impl IntoView {
        let ctx = use_app_ctx();
        let toasts = use_toasts();

        let records = create_rw_signal::<Vec<FormRecord>>(Vec::new());
        let loading = create_rw_signal(true);
        let (manager_filter, set_manager_filter) = create_signal(String::new());
        let (course_filter, set_course_filter) = create_signal(String::new());
        let (date_filter, set_date_filter) = create_signal(String::new());
        let order = create_rw_signal(SortOrder::NewestFirst);
        let pending_delete = create_rw_signal::<Option<FormRecord>>(None);

        // One list fetch on mount. On failure the list is emptied so the
        // view never shows stale data; no automatic retry.
        {
            let api = ctx.api;
            spawn_local(async move {
                let config = api.get_untracked();
                match fetch_forms(&config).await {
                    Ok(list) => records.set(list),
                    Err(e) => {
                        records.set(Vec::new());
                        toasts.error(format!("Could not load forms: {e}"));
                    }
                }
                loading.set(false);
            });
        }

        let visible = move || {
            let filters = FilterSet {
                manager: manager_filter.get(),
                course: course_filter.get(),
                date: date_filter.get(),
            };
            apply(&records.get(), &filters, order.get())
        };

        let download_pdf = move |record: FormRecord| {
            let api = ctx.api;
            spawn_local(async move {
                let config = api.get_untracked();
                match fetch_form_pdf(&config, &record.id).await {
                    Ok(bytes) => {
                        let filename = format!("form_{}.pdf", record.id);
                        if save_bytes(&bytes, PDF_MIME, &filename).is_err() {
                            toasts.error("Could not save the PDF file");
                        }
                    }
                    Err(e) => toasts.error(format!("PDF download failed: {e}")),
                }
            });
        };

        let download_excel = move |_| {
            let api = ctx.api;
            spawn_local(async move {
                let config = api.get_untracked();
                match fetch_excel_export(&config).await {
                    Ok(bytes) => {
                        if save_bytes(&bytes, XLSX_MIME, "forms.xlsx").is_err() {
                            toasts.error("Could not save the spreadsheet");
                        }
                    }
                    Err(e) => toasts.error(format!("Spreadsheet export failed: {e}")),
                }
            });
        };

        // Second step of the delete flow: the record leaves local state
        // only after the backend confirms.
        let confirm_delete = move |_| {
            let Some(record) = pending_delete.get_untracked() else {
                return;
            };
            pending_delete.set(None);
            let api = ctx.api;
            spawn_local(async move {
                let config = api.get_untracked();
                match delete_form(&config, &record.id).await {
                    Ok(()) => {
                        records.update(|list| remove_record(list, &record.id));
                        toasts.info("Form deleted");
                    }
                    Err(e) => toasts.error(format!("Delete failed: {e}")),
                }
            });
        };

        view! {
            <div class="page">
                <div class="panel">
                    <h1 class="page-title">"Form management"</h1>
                    <div class="filter-bar">
                        <div class="input-stack">
                            <label class="input-label" for="filter-manager">"Manager"</label>
                            <input
                                id="filter-manager"
                                type="text"
                                placeholder="Filter by manager..."
                                value=move || manager_filter.get()
                                on:input=move |ev| set_manager_filter.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="input-stack">
                            <label class="input-label" for="filter-course">"Course"</label>
                            <input
                                id="filter-course"
                                type="text"
                                placeholder="Filter by course..."
                                value=move || course_filter.get()
                                on:input=move |ev| set_course_filter.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="input-stack">
                            <label class="input-label" for="filter-date">"Date"</label>
                            <input
                                id="filter-date"
                                type="text"
                                placeholder="YYYY-MM-DD"
                                value=move || date_filter.get()
                                on:input=move |ev| set_date_filter.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="input-stack">
                            <span class="input-label">"Order"</span>
                            <button
                                class="btn"
                                on:click=move |_| order.update(|o| *o = o.toggle())
                            >
                                {move || order.get().label()}
                            </button>
                        </div>
                        <div class="input-stack">
                            <span class="input-label">"Export"</span>
                            <button class="btn btn-accent" on:click=download_excel>
                                "Download spreadsheet"
                            </button>
                        </div>
                    </div>
                    <table class="forms-table">
                        <thead>
                            <tr>
                                <th>"Id"</th>
                                <th>"Created"</th>
                                <th>"Manager"</th>
                                <th>"Course"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = visible();
                                if rows.is_empty() {
                                    let message = if loading.get() {
                                        "Loading..."
                                    } else {
                                        "No forms to show"
                                    };
                                    return view! {
                                        <tr class="empty-row"><td colspan="5">{message}</td></tr>
                                    }
                                    .into_view();
                                }
                                rows.into_iter()
                                    .map(|record| {
                                        let for_download = record.clone();
                                        let for_delete = record.clone();
                                        view! {
                                            <tr>
                                                <td>{record.id.to_string()}</td>
                                                <td>{record.created_at.clone()}</td>
                                                <td>{record.manager.clone()}</td>
                                                <td>{record.course.clone()}</td>
                                                <td>
                                                    <div class="row-actions">
                                                        <button
                                                            class="btn"
                                                            on:click=move |_| download_pdf(for_download.clone())
                                                        >
                                                            "PDF"
                                                        </button>
                                                        <button
                                                            class="btn btn-danger"
                                                            on:click=move |_| pending_delete.set(Some(for_delete.clone()))
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </div>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
                {move || {
                    pending_delete.get().map(|record| {
                        view! {
                            <div class="modal-backdrop" on:click=move |_| pending_delete.set(None)>
                                <div class="modal" on:click=|ev| ev.stop_propagation()>
                                    <p>
                                        "Delete the form from "
                                        <strong>{record.manager.clone()}</strong>
                                        " for "
                                        <strong>{record.course.clone()}</strong>
                                        "? This cannot be undone."
                                    </p>
                                    <div class="modal-actions">
                                        <button class="btn" on:click=move |_| pending_delete.set(None)>
                                            "Cancel"
                                        </button>
                                        <button class="btn btn-danger" on:click=confirm_delete>
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                }}
            </div>
        }
    }
}
