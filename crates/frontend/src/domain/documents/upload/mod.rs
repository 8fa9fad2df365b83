//! Upload section: pending file selection, single and batch uploads.

pub mod view_model;

use crate::app_shell::{Section, SectionRouter};
use crate::domain::documents::api;
use crate::domain::documents::list::view_model::DocumentsVm;
use crate::shared::format_utils::size_kb_precise;
use crate::shared::icons::icon;
use contracts::documents::ApiStatus;
use leptos::prelude::*;
use view_model::{BatchProgress, UploadStatus, UploadVm};

#[component]
#[allow(non_snake_case)]
pub fn UploadSection() -> impl IntoView {
    let vm = UploadVm::new();
    let router = use_context::<SectionRouter>().expect("SectionRouter not found in context");
    let documents = use_context::<DocumentsVm>().expect("DocumentsVm not found in context");
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let clear_input = move || {
        if let Some(input) = file_input_ref.get_untracked() {
            input.set_value("");
        }
    };

    // Navigation side effects: any section change clears the status message;
    // leaving the upload section also drops the pending selection and
    // progress pane.
    Effect::new(move |_| {
        let active = router.active.get();
        vm.status.set(None);
        if active != Section::Upload {
            vm.clear_selection();
            vm.progress.set(None);
            clear_input();
        }
    });

    let handle_select = move |ev: web_sys::Event| {
        use wasm_bindgen::JsCast;
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        if let Some(files) = input.files() {
            vm.select_files(files);
        }
    };

    let handle_upload_single = move |_| {
        if vm.in_progress.get_untracked() {
            return;
        }
        let Some(file) = vm.first_file() else {
            vm.status.set(Some(UploadStatus::Warning(
                "Please select a file first".to_string(),
            )));
            return;
        };
        let name = file.name();

        vm.in_progress.set(true);
        vm.status.set(Some(UploadStatus::InFlight {
            label: format!("Uploading \"{}\"...", name),
            detail: "Processing: Extracting text → Storing document → Creating embeddings"
                .to_string(),
        }));

        wasm_bindgen_futures::spawn_local(async move {
            match api::upload_file(file).await {
                Ok(resp) if resp.status == ApiStatus::Success => {
                    vm.status.set(Some(UploadStatus::SingleDone {
                        filename: resp.filename.unwrap_or(name),
                    }));
                    vm.clear_selection();
                    clear_input();
                    documents.refresh();
                }
                Ok(resp) => {
                    vm.status.set(Some(UploadStatus::Failed {
                        message: resp.message.unwrap_or_else(|| "Unknown error".to_string()),
                    }));
                }
                Err(e) => {
                    log::error!("Upload error: {}", e);
                    vm.status.set(Some(UploadStatus::ConnectionFailed));
                }
            }
            // released in every outcome
            vm.in_progress.set(false);
        });
    };

    let handle_upload_batch = move |_| {
        let total = vm.selected.with_untracked(|v| v.len());
        if total == 0 {
            vm.status.set(Some(UploadStatus::Warning(
                "Please select files first".to_string(),
            )));
            return;
        }
        if vm.in_progress.get_untracked() {
            vm.status.set(Some(UploadStatus::Warning(
                "Upload already in progress".to_string(),
            )));
            return;
        }

        vm.in_progress.set(true);
        vm.progress.set(Some(BatchProgress {
            done: 0,
            total,
            label: "Preparing upload...".to_string(),
        }));
        vm.status.set(Some(UploadStatus::InFlight {
            label: format!("Starting upload of {} files...", total),
            detail: "Processing files in parallel for faster upload".to_string(),
        }));

        let files = vm.all_files();
        wasm_bindgen_futures::spawn_local(async move {
            match api::upload_files(files).await {
                Ok(resp) => {
                    vm.progress.set(Some(BatchProgress {
                        done: resp.successful,
                        total,
                        label: "Complete!".to_string(),
                    }));
                    if resp.is_accepted() {
                        vm.status.set(Some(UploadStatus::BatchDone(resp)));
                        vm.clear_selection();
                        clear_input();
                        documents.refresh();
                    } else {
                        vm.status.set(Some(UploadStatus::Failed {
                            message: resp
                                .message
                                .unwrap_or_else(|| "Unknown error occurred".to_string()),
                        }));
                    }
                }
                Err(e) => {
                    log::error!("Upload error: {}", e);
                    vm.status.set(Some(UploadStatus::ConnectionFailed));
                }
            }
            // guard and progress pane are released regardless of outcome
            vm.in_progress.set(false);
            vm.progress.set(None);
        });
    };

    view! {
        <div class="upload">
            <h2 class="upload__title">"Upload Documents"</h2>
            <p class="upload__hint">"PDF and plain-text files are extracted and embedded for the chatbot."</p>

            <input
                type="file"
                class="upload__input"
                multiple=true
                accept=".pdf,.txt,.md"
                node_ref=file_input_ref
                on:change=handle_select
            />

            // Pending selection summary
            <Show when=move || !vm.selected.with(|v| v.is_empty())>
                <div class="upload__selected">
                    <div class="upload__summary">
                        "Selected: "
                        <strong>{move || vm.selected.with(|v| v.len())}</strong>
                        " file(s), "
                        <strong>{move || size_kb_precise(vm.total_size())}</strong>
                        " total"
                    </div>
                    <div class="upload__file-list">
                        <For
                            each=move || vm.selected.get().into_iter().enumerate()
                            key=|(i, f)| (*i, f.name.clone())
                            let:entry
                        >
                            {{
                                let (index, file) = entry;
                                view! {
                                    <div class="upload__file">
                                        <span class="upload__file-glyph">
                                            {if file.is_pdf() { "📄" } else { "📝" }}
                                        </span>
                                        <div class="upload__file-info">
                                            <div class="upload__file-name">{file.name.clone()}</div>
                                            <div class="upload__file-size">{size_kb_precise(file.size)}</div>
                                        </div>
                                        <button
                                            class="upload__file-remove"
                                            on:click=move |_| vm.remove_file(index)
                                        >
                                            "×"
                                        </button>
                                    </div>
                                }
                            }}
                        </For>
                    </div>
                </div>
            </Show>

            <div class="upload__actions">
                <button
                    class="button button--primary"
                    disabled=move || vm.in_progress.get()
                    on:click=handle_upload_single
                >
                    {icon("upload")}
                    {move || if vm.in_progress.get() { " Uploading..." } else { " Upload Document" }}
                </button>
                <button
                    class="button button--primary"
                    disabled=move || vm.in_progress.get()
                    on:click=handle_upload_batch
                >
                    {icon("upload")}
                    {move || if vm.in_progress.get() { " Uploading..." } else { " Upload All" }}
                </button>
            </div>

            // Batch progress pane
            {move || {
                vm.progress.get().map(|p| {
                    let percent = if p.total == 0 {
                        0.0
                    } else {
                        p.done as f64 * 100.0 / p.total as f64
                    };
                    view! {
                        <div class="upload__progress">
                            <div class="upload__progress-track">
                                <div
                                    class="upload__progress-bar"
                                    style=format!("width: {percent:.0}%;")
                                ></div>
                            </div>
                            <div class="upload__progress-text">
                                {format!("{}/{}", p.done, p.total)}
                            </div>
                            <div class="upload__progress-label">{p.label.clone()}</div>
                        </div>
                    }
                })
            }}

            // Status pane
            <div class="upload__status">
                {move || vm.status.get().map(status_view)}
            </div>
        </div>
    }
}

fn status_view(status: UploadStatus) -> AnyView {
    match status {
        UploadStatus::Warning(message) => view! {
            <div class="status-box status-box--warning">{message}</div>
        }
        .into_any(),
        UploadStatus::InFlight { label, detail } => view! {
            <div class="status-box status-box--info">
                <strong>{label}</strong>
                <div class="status-box__detail">{detail}</div>
            </div>
        }
        .into_any(),
        UploadStatus::SingleDone { filename } => view! {
            <div class="status-box status-box--success">
                <strong>"Upload Successful!"</strong>
                <div class="status-box__detail">
                    {format!("{} uploaded successfully", filename)}
                </div>
            </div>
        }
        .into_any(),
        UploadStatus::BatchDone(resp) => {
            let message = resp.message.clone().unwrap_or_default();
            let successful = resp.successful_files;
            let failed = resp.failed_files;
            let processing_time = resp.processing_time;
            view! {
                <div class="status-box status-box--success">
                    <strong>"Upload Complete!"</strong>
                    <div class="status-box__detail">{message}</div>
                    {(!successful.is_empty()).then(|| view! {
                        <div class="status-box__group">
                            <strong>"Successfully uploaded:"</strong>
                            <ul class="status-box__list">
                                {successful
                                    .iter()
                                    .map(|f| view! { <li>{format!("📄 {}", f.filename)}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    })}
                    {(!failed.is_empty()).then(|| view! {
                        <div class="status-box__group status-box__group--failed">
                            <strong>"Failed to upload:"</strong>
                            <ul class="status-box__list">
                                {failed
                                    .iter()
                                    .map(|f| {
                                        view! { <li>{format!("❌ {}: {}", f.filename, f.error)}</li> }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    })}
                    <div class="status-box__footer">
                        {format!("Processing time: {}", processing_time)}
                    </div>
                </div>
            }
            .into_any()
        }
        UploadStatus::Failed { message } => view! {
            <div class="status-box status-box--error">
                <strong>"Upload Failed"</strong>
                <div class="status-box__detail">{message}</div>
            </div>
        }
        .into_any(),
        UploadStatus::ConnectionFailed => view! {
            <div class="status-box status-box--error">
                <strong>"Connection Error"</strong>
                <div class="status-box__detail">
                    "Make sure the backend server is running and reachable"
                </div>
            </div>
        }
        .into_any(),
    }
}
