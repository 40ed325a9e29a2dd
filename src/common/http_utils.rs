// src/common/http_utils.rs

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::{common::error::AppError, models::envelope::MessagesEnvelope};

// ---
// Helper: junta a URL base com o caminho do recurso
// ---
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Devolve a resposta se for 2xx; senão converte o envelope `{messages}` em
/// `AppError::Rejected` (lista vazia quando o corpo não é o envelope).
pub(crate) async fn ensure_success(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    let messages = serde_json::from_str::<MessagesEnvelope>(&body)
        .map(|envelope| envelope.messages)
        .unwrap_or_default();

    tracing::warn!("⚠️ Backend respondeu {} em {}: {:?}", status, url, messages);

    Err(AppError::Rejected {
        status: status.as_u16(),
        messages,
    })
}

/// `ensure_success` + decodificação do corpo JSON.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<T>().await?)
}
