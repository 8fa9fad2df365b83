use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

/// Response of `POST /chat`. The transcript itself never travels the wire;
/// the backend only returns the answer to the latest query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_shape() {
        let body = serde_json::to_string(&ChatRequest {
            query: "what is in my notes?".into(),
        })
        .unwrap();
        assert_eq!(body, r#"{"query":"what is in my notes?"}"#);
    }

    #[test]
    fn decodes_answer() {
        let resp: ChatResponse =
            serde_json::from_str(r#"{"answer": "Line one\nLine two"}"#).unwrap();
        assert_eq!(resp.answer, "Line one\nLine two");
    }
}
