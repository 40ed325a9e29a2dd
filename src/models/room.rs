// src/models/room.rs

use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::error::AppError;

// Quarto (categoria de ambiente) como vem do GET /rooms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub name: Option<String>,
    pub image: Option<String>,
}

impl Room {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

// Arquivo de imagem que vai no multipart. Os bytes ficam fora da
// serialização (o validator serializa o campo nos parâmetros do erro).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Lê a imagem do disco.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self::new(file_name, bytes))
    }
}

// Formulário de adicionar/atualizar quarto. Os dois campos são obrigatórios
// nos dois modos.
#[derive(Debug, Clone, Default, Validate)]
pub struct RoomForm {
    #[validate(length(min = 1, message = "Vui lòng nhập thông tin!"))]
    pub name: String,

    #[validate(required(message = "Please upload an image"))]
    pub image: Option<ImageUpload>,
}
