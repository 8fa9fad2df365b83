//! Document details - view and edit modals.

use super::view_model::{DetailMode, DocumentDetailsVm};
use crate::domain::documents::list::view_model::DocumentsVm;
use crate::shared::modal::Modal;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

/// Renders the view or edit modal for the currently open document, if any.
#[component]
#[allow(non_snake_case)]
pub fn DocumentModals() -> impl IntoView {
    let details =
        use_context::<DocumentDetailsVm>().expect("DocumentDetailsVm not found in context");
    let documents = use_context::<DocumentsVm>().expect("DocumentsVm not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let on_close = Callback::new(move |_| details.close());

    view! {
        {move || {
            let open = details.open.get()?;
            if !details.loaded.get() {
                return None;
            }
            let view = match open.mode {
                DetailMode::View => view! {
                    <Modal title=format!("Viewing: {}", open.name) on_close=on_close>
                        <pre class="document-view__content">
                            {move || details.content.get()}
                        </pre>
                    </Modal>
                }
                .into_any(),
                DetailMode::Edit => view! {
                    <Modal title=format!("Editing: {}", open.name) on_close=on_close>
                        <textarea
                            class="document-edit__content"
                            prop:value=move || details.content.get()
                            on:input=move |ev| details.content.set(event_target_value(&ev))
                        ></textarea>
                        <div class="modal-footer">
                            <button
                                class="button button--primary save-btn"
                                disabled=move || details.is_saving.get()
                                on:click=move |_| details.save(documents, toasts)
                            >
                                {move || {
                                    if details.is_saving.get() { "Saving..." } else { "Save Changes" }
                                }}
                            </button>
                            <button
                                class="button button--secondary"
                                on:click=move |_| details.close()
                            >
                                "Cancel"
                            </button>
                        </div>
                    </Modal>
                }
                .into_any(),
            };
            Some(view)
        }}
    }
}
