//! Document list - view model.

use crate::domain::documents::api;
use contracts::documents::{ApiStatus, DocumentSummary};
use leptos::prelude::*;

/// Session metadata rendered in the list footer.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInfo {
    pub session_id: Option<String>,
    pub count: u64,
    pub total_in_chromadb: u64,
}

#[derive(Clone, Copy)]
pub struct DocumentsVm {
    pub documents: RwSignal<Vec<DocumentSummary>>,
    pub session: RwSignal<Option<SessionInfo>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    /// Id of the card currently fading out after a delete.
    pub fading: RwSignal<Option<String>>,
    /// Generation token. A refresh response older than the latest request is
    /// dropped so it cannot overwrite a newer render.
    refresh_token: RwSignal<u64>,
}

impl DocumentsVm {
    pub fn new() -> Self {
        Self {
            documents: RwSignal::new(Vec::new()),
            session: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            fading: RwSignal::new(None),
            refresh_token: RwSignal::new(0),
        }
    }

    /// Full replace-render of the list. No pagination, sorting or filtering.
    pub fn refresh(&self) {
        let token = self.refresh_token.get_untracked() + 1;
        self.refresh_token.set(token);
        self.loading.set(true);

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_documents().await;
            if vm.refresh_token.get_untracked() != token {
                // superseded by a newer refresh
                return;
            }
            vm.loading.set(false);
            match result {
                Ok(resp) if resp.status == ApiStatus::Success => {
                    vm.session.set(Some(SessionInfo {
                        session_id: resp.session_id,
                        count: resp.count,
                        total_in_chromadb: resp.total_in_chromadb,
                    }));
                    vm.documents.set(resp.documents);
                    vm.fading.set(None);
                    vm.error.set(None);
                }
                Ok(_) => {
                    vm.error
                        .set(Some("Error loading documents".to_string()));
                }
                Err(e) => {
                    log::error!("Load documents error: {}", e);
                    vm.error.set(Some(e));
                }
            }
        });
    }

    /// Drop one card locally after a confirmed delete; the server is already
    /// up to date, a token-guarded refresh reconciles shortly after.
    pub fn remove_locally(&self, id: &str) {
        self.documents.update(|docs| docs.retain(|d| d.id != id));
        self.fading.set(None);
    }

    pub fn displayed_count(&self) -> usize {
        self.documents.with(|v| v.len())
    }
}

impl Default for DocumentsVm {
    fn default() -> Self {
        Self::new()
    }
}
