//! Upload section - view model.

use contracts::documents::BatchUploadResponse;
use leptos::prelude::*;

/// Metadata of a file picked but not yet uploaded. Plain data so it can live
/// in an ordinary signal; the `web_sys::File` handles themselves are kept in
/// a local-arena signal next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMeta {
    pub name: String,
    pub size: f64,
    pub mime: String,
}

impl FileMeta {
    pub fn is_pdf(&self) -> bool {
        self.mime.contains("pdf")
    }
}

/// What the upload status pane currently shows.
#[derive(Clone)]
pub enum UploadStatus {
    /// User error, e.g. no file selected.
    Warning(String),
    /// A request is running.
    InFlight { label: String, detail: String },
    /// Single upload finished.
    SingleDone { filename: String },
    /// Batch upload finished with per-file breakdown.
    BatchDone(BatchUploadResponse),
    /// The backend rejected the upload.
    Failed { message: String },
    /// Transport failure; the backend may be unreachable.
    ConnectionFailed,
}

/// Progress pane state while a batch request is outstanding.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchProgress {
    pub done: u64,
    pub total: usize,
    pub label: String,
}

#[derive(Clone, Copy)]
pub struct UploadVm {
    /// File handles matching `selected` index for index.
    files: RwSignal<Vec<web_sys::File>, LocalStorage>,
    /// Render-friendly mirror of the pending selection.
    pub selected: RwSignal<Vec<FileMeta>>,
    /// In-flight guard shared by single and batch uploads.
    pub in_progress: RwSignal<bool>,
    pub status: RwSignal<Option<UploadStatus>>,
    pub progress: RwSignal<Option<BatchProgress>>,
}

impl UploadVm {
    pub fn new() -> Self {
        Self {
            files: RwSignal::new_local(Vec::new()),
            selected: RwSignal::new(Vec::new()),
            in_progress: RwSignal::new(false),
            status: RwSignal::new(None),
            progress: RwSignal::new(None),
        }
    }

    /// Replace the pending selection with the given file list.
    pub fn select_files(&self, list: web_sys::FileList) {
        let mut files = Vec::new();
        let mut metas = Vec::new();
        for i in 0..list.length() {
            if let Some(file) = list.get(i) {
                metas.push(FileMeta {
                    name: file.name(),
                    size: file.size(),
                    mime: file.type_(),
                });
                files.push(file);
            }
        }
        self.files.set(files);
        self.selected.set(metas);
    }

    /// Remove one entry from the pending selection. No-ops out of bounds.
    pub fn remove_file(&self, index: usize) {
        self.files.update(|v| {
            remove_at(v, index);
        });
        self.selected.update(|v| {
            remove_at(v, index);
        });
    }

    pub fn clear_selection(&self) {
        self.files.set(Vec::new());
        self.selected.set(Vec::new());
    }

    pub fn first_file(&self) -> Option<web_sys::File> {
        self.files.with_untracked(|v| v.first().cloned())
    }

    pub fn all_files(&self) -> Vec<web_sys::File> {
        self.files.get_untracked()
    }

    pub fn total_size(&self) -> f64 {
        self.selected.with(|v| v.iter().map(|f| f.size).sum())
    }
}

impl Default for UploadVm {
    fn default() -> Self {
        Self::new()
    }
}

fn remove_at<T>(items: &mut Vec<T>, index: usize) -> bool {
    if index < items.len() {
        items.remove(index);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str) -> FileMeta {
        FileMeta {
            name: name.into(),
            size: 100.0,
            mime: "text/plain".into(),
        }
    }

    #[test]
    fn remove_at_keeps_the_rest_in_order() {
        let mut items = vec![meta("a"), meta("b"), meta("c")];
        assert!(remove_at(&mut items, 1));
        let names: Vec<_> = items.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn remove_at_out_of_bounds_is_a_noop() {
        let mut items = vec![meta("a")];
        assert!(!remove_at(&mut items, 1));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn pdf_detection_uses_mime() {
        let pdf = FileMeta {
            name: "r.pdf".into(),
            size: 1.0,
            mime: "application/pdf".into(),
        };
        assert!(pdf.is_pdf());
        assert!(!meta("r.txt").is_pdf());
    }
}
