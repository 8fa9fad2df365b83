//! Document details - view model.
//!
//! Holds the single current-document reference: at most one document is open
//! in a modal at a time, and save/delete style operations are only valid
//! while the reference is set.

use crate::domain::documents::api;
use crate::domain::documents::list::view_model::DocumentsVm;
use crate::shared::toast::ToastService;
use contracts::documents::ApiStatus;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMode {
    View,
    Edit,
}

/// The `(id, name)` reference of the document open in a modal.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenDocument {
    pub id: String,
    pub name: String,
    pub mode: DetailMode,
}

#[derive(Clone, Copy)]
pub struct DocumentDetailsVm {
    pub open: RwSignal<Option<OpenDocument>>,
    /// True once the content fetch finished; the modal renders only then.
    pub loaded: RwSignal<bool>,
    /// Fetched content; doubles as the edit buffer in edit mode.
    pub content: RwSignal<String>,
    pub is_saving: RwSignal<bool>,
}

impl DocumentDetailsVm {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(None),
            loaded: RwSignal::new(false),
            content: RwSignal::new(String::new()),
            is_saving: RwSignal::new(false),
        }
    }

    /// Set the current-document reference and fetch its full content. The
    /// modal opens when the fetch succeeds; on failure the reference is
    /// cleared again, since no modal ever opened.
    pub fn open_document(&self, id: String, name: String, mode: DetailMode) {
        self.loaded.set(false);
        self.content.set(String::new());
        self.open.set(Some(OpenDocument {
            id: id.clone(),
            name,
            mode,
        }));

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_document(&id).await;
            // a quick second open may have replaced the reference
            if vm.open.with_untracked(|o| o.as_ref().map(|o| o.id.clone())) != Some(id) {
                return;
            }
            match result {
                Ok(resp) if resp.status == ApiStatus::Success => match resp.document {
                    Some(doc) => {
                        vm.content.set(doc.content);
                        vm.loaded.set(true);
                    }
                    None => {
                        alert("Error loading document");
                        vm.close();
                    }
                },
                Ok(resp) => {
                    alert(&format!(
                        "Error loading document: {}",
                        resp.message.unwrap_or_else(|| "Unknown error".to_string())
                    ));
                    vm.close();
                }
                Err(e) => {
                    log::error!("Load document error: {}", e);
                    alert("Error loading document");
                    vm.close();
                }
            }
        });
    }

    /// Hide the modal and clear the current-document reference. Always
    /// re-enables the save control.
    pub fn close(&self) {
        self.is_saving.set(false);
        self.loaded.set(false);
        self.content.set(String::new());
        self.open.set(None);
    }

    /// Whole-content replace of the open document. No-ops without an open
    /// reference or while a save is already in flight.
    pub fn save(&self, documents: DocumentsVm, toasts: ToastService) {
        let Some(open) = self.open.get_untracked() else {
            return;
        };
        if self.is_saving.get_untracked() {
            return;
        }
        self.is_saving.set(true);
        let content = self.content.get_untracked();

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_document(&open.id, &content).await {
                Ok(resp) if resp.status == ApiStatus::Success => {
                    vm.close();
                    documents.refresh();
                    toasts.success("Document saved successfully!");
                }
                Ok(resp) => {
                    alert(&format!(
                        "Error saving document: {}",
                        resp.message.unwrap_or_else(|| "Unknown error".to_string())
                    ));
                    // modal stays open, save control is re-enabled
                    vm.is_saving.set(false);
                }
                Err(e) => {
                    log::error!("Save document error: {}", e);
                    alert("Error saving document");
                    vm.is_saving.set(false);
                }
            }
        });
    }
}

impl Default for DocumentDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
