// src/handlers/rooms.rs

use validator::Validate;

use crate::{
    common::error::{form_errors, AppError, FormErrors},
    config::AdminContext,
    middleware::auth::AuthenticatedSession,
    models::{
        envelope::MessagesEnvelope,
        room::{ImageUpload, Room, RoomForm},
        ui::ModalState,
    },
    services::room_service::search_rooms,
};

/// Quando o backend aceita mas não manda mensagem.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thao tác thành công!";

// Tela "Quản lý danh mục phòng": busca, modal de adicionar/editar e exclusão.
pub struct RoomsPage {
    ctx: AdminContext,
    data: Vec<Room>,
    filter_text: String,
    modal: ModalState,
    form: RoomForm,
    form_errors: FormErrors,
    is_loading: bool,
}

impl RoomsPage {
    pub fn new(ctx: AdminContext) -> Self {
        Self {
            ctx,
            data: Vec::new(),
            filter_text: String::new(),
            modal: ModalState::Closed,
            form: RoomForm::default(),
            form_errors: FormErrors::new(),
            is_loading: false,
        }
    }

    pub async fn mount(&mut self) -> Result<(), AppError> {
        AuthenticatedSession::from_store(&self.ctx.store)?;
        self.fetch_data().await;
        Ok(())
    }

    /// Recarrega a lista e empurra a cópia para o store global.
    pub async fn fetch_data(&mut self) {
        match self.ctx.room_service.list_rooms().await {
            Ok(rooms) => {
                self.ctx.store.set_rooms(rooms.clone());
                self.data = rooms;
            }
            Err(err) => self.ctx.report_read_failure("quartos", &err),
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    // --- Busca ---

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
    }

    pub fn clear_filter(&mut self) {
        self.filter_text.clear();
    }

    /// Recalculado a cada tecla sobre a lista inteira em memória.
    pub fn filtered_rooms(&self) -> Vec<&Room> {
        search_rooms(&self.data, &self.filter_text)
    }

    // --- Modal e formulário ---

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn form(&self) -> &RoomForm {
        &self.form
    }

    pub fn form_errors(&self) -> &FormErrors {
        &self.form_errors
    }

    pub fn open_add_dialog(&mut self) {
        self.modal = ModalState::Add;
    }

    pub fn open_edit_dialog(&mut self, room_id: i64) {
        self.modal = ModalState::Edit(room_id);
    }

    pub fn close_dialog(&mut self) {
        self.modal = ModalState::Closed;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_image(&mut self, image: ImageUpload) {
        self.form.image = Some(image);
    }

    fn reset_form(&mut self) {
        self.form = RoomForm::default();
        self.form_errors.clear();
        self.modal = ModalState::Closed;
    }

    /// Envia o formulário (adicionar ou atualizar, conforme o modal).
    ///
    /// Formulário inválido: erros por campo e nada é enviado. Válido: o modal
    /// fecha antes da requisição e continua fechado mesmo se ela falhar.
    pub async fn submit_form(&mut self) -> bool {
        if let Err(errors) = self.form.validate() {
            self.form_errors = form_errors(&errors);
            return false;
        }
        self.form_errors.clear();

        let mode = self.modal;
        if !mode.is_open() {
            tracing::warn!("Formulário de quarto enviado com o modal fechado");
            return false;
        }

        self.is_loading = true;
        self.close_dialog();

        let session = match AuthenticatedSession::from_store(&self.ctx.store) {
            Ok(session) => session,
            Err(err) => return self.fail(err),
        };

        let result = match mode {
            ModalState::Edit(room_id) => {
                self.ctx
                    .room_service
                    .update_room(&session, room_id, &self.form)
                    .await
            }
            _ => self.ctx.room_service.add_room(&session, &self.form).await,
        };

        match result {
            Ok(resp) => {
                self.succeed(&resp).await;
                self.reset_form();
                true
            }
            Err(err) => self.fail(err),
        }
    }

    /// Exclui o quarto e recarrega a lista. Na falha a lista fica como estava.
    pub async fn delete_room(&mut self, room_id: i64) -> bool {
        self.is_loading = true;

        let session = match AuthenticatedSession::from_store(&self.ctx.store) {
            Ok(session) => session,
            Err(err) => return self.fail(err),
        };

        match self.ctx.room_service.delete_room(&session, room_id).await {
            Ok(resp) => {
                self.succeed(&resp).await;
                true
            }
            Err(err) => self.fail(err),
        }
    }

    async fn succeed(&mut self, resp: &MessagesEnvelope) {
        self.is_loading = false;
        self.ctx
            .notifier
            .success(resp.first().unwrap_or(DEFAULT_SUCCESS_MESSAGE));
        self.fetch_data().await;
    }

    fn fail(&mut self, err: AppError) -> bool {
        self.is_loading = false;
        tracing::error!("Falha na mutação de quarto: {}", err);
        self.ctx.notifier.error(err.user_message());
        false
    }
}
