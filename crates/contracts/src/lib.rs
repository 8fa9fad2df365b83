//! Wire contracts for the document-session backend.
//!
//! The backend is an external HTTP service; these types mirror the JSON
//! payloads it accepts and returns. Timestamps stay wire strings (ISO 8601),
//! formatting is a frontend concern.

pub mod chat;
pub mod documents;
