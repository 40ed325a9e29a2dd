// src/services/room_service.rs

use validator::Validate;

use crate::{
    api::RoomRepository,
    common::error::AppError,
    middleware::auth::AuthenticatedSession,
    models::{
        envelope::MessagesEnvelope,
        room::{ImageUpload, Room, RoomForm},
    },
};

#[derive(Clone)]
pub struct RoomService {
    repo: RoomRepository,
}

impl RoomService {
    pub fn new(repo: RoomRepository) -> Self {
        Self { repo }
    }

    pub async fn list_rooms(&self) -> Result<Vec<Room>, AppError> {
        let rooms = self.repo.get_all_rooms().await?;
        tracing::info!("🛏️ {} quartos carregados", rooms.len());
        Ok(rooms)
    }

    // --- ADD ROOM ---
    pub async fn add_room(
        &self,
        session: &AuthenticatedSession,
        form: &RoomForm,
    ) -> Result<MessagesEnvelope, AppError> {
        let (name, image) = validated(form)?;
        let resp = self.repo.add_room(session.token(), name, image).await?;
        tracing::info!("➕ Quarto '{}' criado", name);
        Ok(resp)
    }

    // --- UPDATE ROOM ---
    pub async fn update_room(
        &self,
        session: &AuthenticatedSession,
        room_id: i64,
        form: &RoomForm,
    ) -> Result<MessagesEnvelope, AppError> {
        let (name, image) = validated(form)?;
        let resp = self
            .repo
            .update_room(session.token(), room_id, name, image)
            .await?;
        tracing::info!("✏️ Quarto {} atualizado", room_id);
        Ok(resp)
    }

    // --- DELETE ROOM ---
    pub async fn delete_room(
        &self,
        session: &AuthenticatedSession,
        room_id: i64,
    ) -> Result<MessagesEnvelope, AppError> {
        let resp = self.repo.delete_room(session.token(), room_id).await?;
        tracing::info!("🗑️ Quarto {} removido", room_id);
        Ok(resp)
    }
}

// Nenhuma requisição sai com formulário inválido.
fn validated(form: &RoomForm) -> Result<(&str, &ImageUpload), AppError> {
    form.validate()?;
    let image = form
        .image
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("imagem ausente após validação"))?;
    Ok((form.name.as_str(), image))
}

/// Busca por substring sem diferenciar maiúsculas, no texto cru do nome.
/// Acentos NÃO são normalizados: "phong" não acha "Phòng VIP".
/// Quartos sem nome nunca aparecem.
pub fn search_rooms<'a>(rooms: &'a [Room], filter_text: &str) -> Vec<&'a Room> {
    let needle = filter_text.to_lowercase();
    rooms
        .iter()
        .filter(|room| {
            let name = room.name();
            !name.is_empty() && name.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: i64, name: Option<&str>) -> Room {
        Room {
            id,
            name: name.map(str::to_string),
            image: None,
        }
    }

    fn names<'a>(rooms: &[&'a Room]) -> Vec<&'a str> {
        rooms.iter().map(|r| r.name()).collect()
    }

    #[test]
    fn search_ignores_case() {
        let rooms = vec![room(1, Some("Phòng VIP")), room(2, Some("Bếp"))];
        assert_eq!(names(&search_rooms(&rooms, "vip")), vec!["Phòng VIP"]);
        assert_eq!(names(&search_rooms(&rooms, "PHÒNG")), vec!["Phòng VIP"]);
    }

    #[test]
    fn search_does_not_strip_diacritics() {
        let rooms = vec![room(1, Some("Phòng VIP"))];
        assert!(search_rooms(&rooms, "phong").is_empty());
        assert_eq!(search_rooms(&rooms, "phòng").len(), 1);
    }

    #[test]
    fn empty_search_returns_every_named_room() {
        let rooms = vec![room(1, Some("A")), room(2, None), room(3, Some(""))];
        let found = search_rooms(&rooms, "");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn invalid_form_never_reaches_the_backend() {
        let err = validated(&RoomForm::default()).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
