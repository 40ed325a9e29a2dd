// src/api/room_repo.rs

use reqwest::{
    multipart::{Form, Part},
    Client,
};

use crate::{
    common::{
        error::AppError,
        http_utils::{endpoint, read_json},
    },
    models::{
        envelope::MessagesEnvelope,
        room::{ImageUpload, Room},
    },
};

#[derive(Clone)]
pub struct RoomRepository {
    client: Client,
    base_url: String,
}

impl RoomRepository {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    // GET /rooms (público, sem token)
    pub async fn get_all_rooms(&self) -> Result<Vec<Room>, AppError> {
        let response = self
            .client
            .get(endpoint(&self.base_url, "rooms"))
            .send()
            .await?;

        read_json(response).await
    }

    // POST /rooms (multipart: name, image)
    pub async fn add_room(
        &self,
        token: &str,
        name: &str,
        image: &ImageUpload,
    ) -> Result<MessagesEnvelope, AppError> {
        let response = self
            .client
            .post(endpoint(&self.base_url, "rooms"))
            .bearer_auth(token)
            .multipart(room_form(name, image)?)
            .send()
            .await?;

        read_json(response).await
    }

    // PUT /rooms/{id} (multipart)
    pub async fn update_room(
        &self,
        token: &str,
        room_id: i64,
        name: &str,
        image: &ImageUpload,
    ) -> Result<MessagesEnvelope, AppError> {
        let response = self
            .client
            .put(endpoint(&self.base_url, &format!("rooms/{room_id}")))
            .bearer_auth(token)
            .multipart(room_form(name, image)?)
            .send()
            .await?;

        read_json(response).await
    }

    // DELETE /rooms/{id}
    pub async fn delete_room(&self, token: &str, room_id: i64) -> Result<MessagesEnvelope, AppError> {
        let response = self
            .client
            .delete(endpoint(&self.base_url, &format!("rooms/{room_id}")))
            .bearer_auth(token)
            .send()
            .await?;

        read_json(response).await
    }
}

fn room_form(name: &str, image: &ImageUpload) -> Result<Form, AppError> {
    let part = Part::bytes(image.bytes.clone())
        .file_name(image.file_name.clone())
        .mime_str(&image.content_type)?;

    Ok(Form::new().text("name", name.to_string()).part("image", part))
}
