// src/models/envelope.rs

use serde::Deserialize;

// Envelope que o backend usa tanto no sucesso quanto no erro das mutações:
// { "messages": ["..."] }
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessagesEnvelope {
    #[serde(default, deserialize_with = "crate::common::serde_utils::null_as_default")]
    pub messages: Vec<String>,
}

impl MessagesEnvelope {
    pub fn first(&self) -> Option<&str> {
        self.messages
            .iter()
            .map(String::as_str)
            .find(|m| !m.trim().is_empty())
    }
}
