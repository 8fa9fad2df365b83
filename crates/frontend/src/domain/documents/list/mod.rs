//! Documents section: session document cards with view/edit/delete actions.

pub mod view_model;

use crate::app_shell::{Section, SectionRouter};
use crate::domain::documents::api;
use crate::domain::documents::details::view::DocumentModals;
use crate::domain::documents::details::view_model::{DetailMode, DocumentDetailsVm};
use crate::shared::date_utils::format_date;
use crate::shared::format_utils::size_kb;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::documents::ApiStatus;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use view_model::DocumentsVm;

/// Card fade-out duration before the optimistic removal.
const FADE_MS: u32 = 300;
/// Delay before the reconciliation refresh after a delete.
const RECONCILE_MS: u32 = 1000;

#[component]
#[allow(non_snake_case)]
pub fn DocumentsSection() -> impl IntoView {
    let vm = use_context::<DocumentsVm>().expect("DocumentsVm not found in context");
    let details =
        use_context::<DocumentDetailsVm>().expect("DocumentDetailsVm not found in context");
    let router = use_context::<SectionRouter>().expect("SectionRouter not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    // Load once at startup, then again every time the section is entered.
    vm.refresh();
    Effect::new(move |_| {
        if router.active.get() == Section::Documents {
            vm.refresh();
        }
    });

    let handle_view = move |id: String, name: String| {
        details.open_document(id, name, DetailMode::View);
    };

    let handle_edit = move |id: String, name: String| {
        details.open_document(id, name, DetailMode::Edit);
    };

    let handle_delete = move |id: String, name: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!(
                    "Are you sure you want to delete \"{}\" from current session?\nThis will also remove it from chatbot memory.",
                    name
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_document(&id).await {
                Ok(resp) if resp.status == ApiStatus::Success => {
                    toasts.success(format!("Document \"{}\" deleted successfully!", name));
                    // fade the card, then drop it locally; the real state is
                    // reconciled by a token-guarded refresh shortly after
                    vm.fading.set(Some(id.clone()));
                    TimeoutFuture::new(FADE_MS).await;
                    vm.remove_locally(&id);
                    TimeoutFuture::new(RECONCILE_MS).await;
                    vm.refresh();
                }
                Ok(resp) => {
                    toasts.error(format!(
                        "Error: {}",
                        resp.message.unwrap_or_else(|| "Unknown error".to_string())
                    ));
                }
                Err(e) => {
                    log::error!("Delete document error: {}", e);
                    toasts.error("Error deleting document. Please try again.");
                }
            }
        });
    };

    view! {
        <div class="documents">
            <div class="documents__header">
                <h2 class="documents__title">
                    "Your Documents ("
                    <span class="documents__count">{move || vm.displayed_count()}</span>
                    ")"
                </h2>
                <button class="button button--secondary" on:click=move |_| vm.refresh()>
                    {icon("refresh")}
                    " Refresh"
                </button>
            </div>

            <div class="documents__list">
                {move || {
                    if vm.loading.get() {
                        return view! {
                            <div class="documents__loading">
                                <div class="spinner"></div>
                                <p>"Loading session documents..."</p>
                            </div>
                        }
                        .into_any();
                    }
                    if let Some(e) = vm.error.get() {
                        return view! {
                            <div class="documents__error">
                                <strong>"Error loading documents"</strong>
                                <div>{e}</div>
                            </div>
                        }
                        .into_any();
                    }
                    if vm.documents.with(|v| v.is_empty()) {
                        return empty_state();
                    }

                    let cards = vm
                        .documents
                        .get()
                        .into_iter()
                        .map(|doc| {
                            let id = doc.id.clone();
                            let name = doc.filename.clone();
                            let view_id = id.clone();
                            let view_name = name.clone();
                            let edit_id = id.clone();
                            let edit_name = name.clone();
                            let delete_id = id.clone();
                            let delete_name = name.clone();
                            let fading_id = id.clone();
                            view! {
                                <div
                                    class="document-card"
                                    class:document-card--fading=move || {
                                        vm.fading.get().as_deref() == Some(fading_id.as_str())
                                    }
                                >
                                    <div class="document-card__header">
                                        <div class="document-card__title">
                                            {icon("document")}
                                            " "
                                            {doc.filename.clone()}
                                        </div>
                                        <div class="document-card__date">
                                            {format_date(&doc.uploaded_at)}
                                        </div>
                                    </div>
                                    <div class="document-card__meta">
                                        <div>{format!("Size: {}", size_kb(doc.size))}</div>
                                        <div class="document-card__preview">{doc.preview.clone()}</div>
                                    </div>
                                    <div class="document-card__actions">
                                        <button
                                            class="button button--small"
                                            on:click=move |_| handle_view(view_id.clone(), view_name.clone())
                                        >
                                            "View"
                                        </button>
                                        <button
                                            class="button button--small"
                                            on:click=move |_| handle_edit(edit_id.clone(), edit_name.clone())
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="button button--small button--danger"
                                            on:click=move |_| handle_delete(delete_id.clone(), delete_name.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view();

                    let footer = vm.session.get().map(|session| {
                        view! {
                            <div class="documents__session-info">
                                <div>
                                    {format!(
                                        "Session ID: {}",
                                        session.session_id.unwrap_or_else(|| "N/A".to_string())
                                    )}
                                </div>
                                <div>
                                    {format!(
                                        "Documents in session: {} | Total in database: {}",
                                        session.count, session.total_in_chromadb
                                    )}
                                </div>
                            </div>
                        }
                    });

                    view! {
                        <div>
                            {cards}
                            {footer}
                        </div>
                    }
                    .into_any()
                }}
            </div>

            <DocumentModals />
        </div>
    }
}

fn empty_state() -> AnyView {
    view! {
        <div class="documents__empty">
            {icon("folder")}
            <h4>"No documents in current session"</h4>
            <p>"Upload documents to get started!"</p>
        </div>
    }
    .into_any()
}
