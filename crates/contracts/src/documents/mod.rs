use serde::{Deserialize, Serialize};

/// Status discriminator carried by every document endpoint response.
///
/// The backend answers HTTP 200 even for application-level failures, so the
/// `status` field is the source of truth. `partial` only occurs on batch
/// uploads where some files failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Partial,
    Error,
    #[serde(other)]
    Unknown,
}

/// One document as listed by `GET /ui-documents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: String,
    pub filename: String,
    /// ISO 8601 timestamp as produced by the backend.
    pub uploaded_at: String,
    /// Size of the original file in bytes.
    pub size: u64,
    /// First ~100 characters of the extracted text.
    pub preview: String,
    pub session_id: Option<String>,
}

/// Response of `GET /ui-documents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentListResponse {
    pub status: ApiStatus,
    /// Number of documents in the current session.
    #[serde(default)]
    pub count: u64,
    pub session_id: Option<String>,
    /// Total documents server-side, across all sessions.
    #[serde(default)]
    pub total_in_chromadb: u64,
    #[serde(default)]
    pub documents: Vec<DocumentSummary>,
}

/// Full document as returned by `GET /ui-documents/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDetail {
    pub id: String,
    pub filename: String,
    pub content: String,
    pub uploaded_at: String,
    pub size: u64,
    pub file_type: Option<String>,
    pub session_id: Option<String>,
}

/// Response of `GET /ui-documents/{id}`. `document` is absent on errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub status: ApiStatus,
    pub document: Option<DocumentDetail>,
    pub message: Option<String>,
}

/// Body of `PUT /ui-documents/{id}`. Whole-content replace, no diff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDocumentRequest {
    pub content: String,
}

/// Response of `PUT` and `DELETE /ui-documents/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    pub status: ApiStatus,
    pub message: Option<String>,
}

/// Response of `POST /upload` (single file).
///
/// Everything but `status` is absent when the upload is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub status: ApiStatus,
    pub filename: Option<String>,
    pub session_id: Option<String>,
    /// Human-readable duration, e.g. "1.42s".
    pub processing_time: Option<String>,
    pub message: Option<String>,
}

/// Per-file success entry in a batch upload response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub filename: String,
    pub id: String,
    pub size: u64,
    pub preview: String,
}

/// Per-file failure entry in a batch upload response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedFile {
    pub filename: String,
    pub error: String,
}

/// Response of `POST /upload-multiple`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchUploadResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub total_files: u64,
    #[serde(default)]
    pub successful: u64,
    #[serde(default)]
    pub failed: u64,
    /// Human-readable duration, e.g. "3.08s".
    #[serde(default)]
    pub processing_time: String,
    pub session_id: Option<String>,
    #[serde(default)]
    pub successful_files: Vec<UploadedFile>,
    #[serde(default)]
    pub failed_files: Vec<FailedFile>,
    pub message: Option<String>,
}

impl BatchUploadResponse {
    /// A batch counts as accepted when everything or at least part of it
    /// made it into the session. Both cases clear the pending selection.
    pub fn is_accepted(&self) -> bool {
        matches!(self.status, ApiStatus::Success | ApiStatus::Partial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_document_list() {
        let json = r#"{
            "status": "success",
            "count": 1,
            "session_id": "9f8e7d6c",
            "total_in_chromadb": 42,
            "documents": [{
                "id": "abc-123",
                "filename": "notes.txt",
                "uploaded_at": "2024-03-15T14:02:26.123456",
                "size": 2048,
                "session_id": "9f8e7d6c",
                "preview": "hello..."
            }]
        }"#;
        let resp: DocumentListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, ApiStatus::Success);
        assert_eq!(resp.count, 1);
        assert_eq!(resp.total_in_chromadb, 42);
        assert_eq!(resp.documents[0].filename, "notes.txt");
    }

    #[test]
    fn decodes_partial_batch_as_accepted() {
        let json = r#"{
            "status": "partial",
            "total_files": 3,
            "successful": 2,
            "failed": 1,
            "processing_time": "3.08s",
            "session_id": "9f8e7d6c",
            "successful_files": [
                {"filename": "a.txt", "id": "1", "size": 10, "preview": "a"},
                {"filename": "b.txt", "id": "2", "size": 20, "preview": "b"}
            ],
            "failed_files": [
                {"filename": "c.pdf", "error": "No text extracted from file"}
            ],
            "message": "Successfully uploaded 2 file(s) to current session, 1 failed"
        }"#;
        let resp: BatchUploadResponse = serde_json::from_str(json).unwrap();
        assert!(resp.is_accepted());
        assert_eq!(resp.successful_files.len(), 2);
        assert_eq!(resp.failed_files[0].error, "No text extracted from file");
    }

    #[test]
    fn decodes_batch_rejection_without_counters() {
        // "No files selected" replies carry only status and message.
        let json = r#"{"status": "error", "message": "No files selected"}"#;
        let resp: BatchUploadResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.is_accepted());
        assert_eq!(resp.total_files, 0);
        assert!(resp.successful_files.is_empty());
    }

    #[test]
    fn unknown_status_does_not_fail_decoding() {
        let json = r#"{"status": "queued", "message": "later"}"#;
        let resp: MutationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, ApiStatus::Unknown);
    }

    #[test]
    fn update_request_shape() {
        let body = serde_json::to_string(&UpdateDocumentRequest {
            content: "new text".into(),
        })
        .unwrap();
        assert_eq!(body, r#"{"content":"new text"}"#);
    }
}
