// src/common/error.rs

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::auth::Role;

/// Mensagem genérica mostrada quando o backend não explica o erro.
pub const GENERIC_ERROR_MESSAGE: &str = "Có lỗi xảy ra.";

/// Mensagem mostrada quando o papel do usuário não permite a ação.
pub const FORBIDDEN_MESSAGE: &str = "Không có quyền thực hiện!";

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    // Sem sessão: a tela manda para o login.
    #[error("Sessão ausente ou expirada")]
    Unauthenticated,

    #[error("Permissão insuficiente: requer o papel {required}")]
    Forbidden { required: Role },

    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // O backend respondeu com status de erro e (talvez) um envelope `messages`.
    #[error("Backend recusou a requisição ({status}): {messages:?}")]
    Rejected { status: u16, messages: Vec<String> },

    #[error("Resposta inesperada do backend: {0}")]
    UnexpectedResponse(String),

    // Falhas de transporte (conexão, timeout, JSON inválido)
    #[error("Erro HTTP: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Erro de E/S: {0}")]
    IoError(#[from] std::io::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno")]
    InternalError(#[from] anyhow::Error),
}

/// Erros de formulário por campo: o primeiro erro de cada campo.
pub type FormErrors = BTreeMap<String, String>;

impl AppError {
    /// Texto que vai para a notificação do usuário.
    ///
    /// Para erros do servidor é a primeira mensagem do envelope; para o resto,
    /// a mensagem genérica.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Rejected { messages, .. } => messages
                .iter()
                .find(|m| !m.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            AppError::Forbidden { .. } => FORBIDDEN_MESSAGE.to_string(),
            AppError::ValidationError(errors) => form_errors(errors)
                .into_values()
                .next()
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            ref e => {
                tracing::error!("Erro sem mensagem do servidor: {}", e);
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}

/// Achata os erros do `validator` em "campo -> primeira mensagem".
pub fn form_errors(errors: &validator::ValidationErrors) -> FormErrors {
    let mut details = FormErrors::new();
    for (field, field_errors) in errors.field_errors() {
        let message = field_errors
            .iter()
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        details.insert(field.to_string(), message);
    }
    details
}
