// src/handlers/orders.rs

use crate::{
    common::error::AppError,
    config::AdminContext,
    middleware::{
        auth::AuthenticatedSession,
        rbac::{RequireRole, StaffOnly},
    },
    models::{
        order::{Order, OrderStatus, OrderTab, StatusCounts},
        ui::ModalState,
    },
    services::order_service::visible_orders,
};

pub const STATUS_UPDATED_MESSAGE: &str = "Thay đổi trạng thái thành công!";

// Tela "Quản lý đơn hàng": lista, abas por status e o diálogo de troca de status.
pub struct OrdersPage {
    ctx: AdminContext,
    data: Vec<Order>,
    counts: StatusCounts,
    // Loader da tabela: só some depois da primeira busca bem-sucedida
    pending: bool,
    is_loading: bool,
    active_tab: OrderTab,
    modal: ModalState,
    selected_status: Option<OrderStatus>,
}

impl OrdersPage {
    pub fn new(ctx: AdminContext) -> Self {
        Self {
            ctx,
            data: Vec::new(),
            counts: StatusCounts::zeroed(),
            pending: true,
            is_loading: false,
            active_tab: OrderTab::All,
            modal: ModalState::Closed,
            selected_status: None,
        }
    }

    pub async fn mount(&mut self) -> Result<(), AppError> {
        AuthenticatedSession::from_store(&self.ctx.store)?;
        self.fetch_data().await;
        Ok(())
    }

    /// Busca a lista inteira e recalcula as contagens. Falha só é logada.
    pub async fn fetch_data(&mut self) {
        let session = match AuthenticatedSession::from_store(&self.ctx.store) {
            Ok(session) => session,
            Err(err) => return self.ctx.report_read_failure("pedidos", &err),
        };

        match self.ctx.order_service.fetch_board(&session).await {
            Ok(board) => {
                self.data = board.orders;
                self.counts = board.counts;
                self.pending = false;
            }
            Err(err) => self.ctx.report_read_failure("pedidos", &err),
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.data
    }

    pub fn counts(&self) -> &StatusCounts {
        &self.counts
    }

    pub fn total_count(&self) -> usize {
        self.data.len()
    }

    pub fn pending(&self) -> bool {
        self.pending
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn active_tab(&self) -> OrderTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: OrderTab) {
        self.active_tab = tab;
    }

    /// Linhas da tabela: aba ativa, id decrescente.
    pub fn visible_orders(&self) -> Vec<&Order> {
        visible_orders(&self.data, self.active_tab)
    }

    /// O botão de editar só aparece para STAFF.
    pub fn can_edit_orders(&self) -> bool {
        self.ctx
            .store
            .current_user()
            .is_some_and(|user| RequireRole::<StaffOnly>::allows(&user))
    }

    // --- Diálogo de status ---

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn selected_status(&self) -> Option<OrderStatus> {
        self.selected_status
    }

    pub fn open_status_dialog(&mut self, order_id: i64, current_status: OrderStatus) {
        self.modal = ModalState::Edit(order_id);
        self.selected_status = Some(current_status);
    }

    pub fn select_target_status(&mut self, status: OrderStatus) {
        self.selected_status = Some(status);
    }

    pub fn close_dialog(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Confirma o diálogo. Devolve `true` se o backend aceitou.
    ///
    /// Papel diferente de STAFF: notificação de erro e nenhuma requisição.
    /// Em qualquer falha o diálogo continua aberto.
    pub async fn submit_status_update(&mut self) -> bool {
        let (Some(order_id), Some(target)) = (self.modal.editing_id(), self.selected_status) else {
            tracing::warn!("Confirmação de status sem pedido selecionado");
            return false;
        };

        self.is_loading = true;

        let session = match AuthenticatedSession::from_store(&self.ctx.store) {
            Ok(session) => session,
            Err(err) => return self.fail(err),
        };

        let guard = match RequireRole::<StaffOnly>::check(&session) {
            Ok(guard) => guard,
            Err(err) => return self.fail(err),
        };

        match self
            .ctx
            .order_service
            .update_status(&session, &guard, order_id, target)
            .await
        {
            Ok(()) => {
                self.ctx.notifier.success(STATUS_UPDATED_MESSAGE);
                self.fetch_data().await;
                self.is_loading = false;
                self.close_dialog();
                true
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: AppError) -> bool {
        self.is_loading = false;
        tracing::error!("Falha ao atualizar status: {}", err);
        self.ctx.notifier.error(err.user_message());
        false
    }
}
