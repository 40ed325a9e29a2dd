// src/services/order_service.rs

use crate::{
    api::OrderRepository,
    common::error::AppError,
    middleware::{
        auth::AuthenticatedSession,
        rbac::{RequireRole, StaffOnly},
    },
    models::order::{Order, OrderStatus, OrderTab, StatusCounts},
};

/// Lista buscada + contagem por status, calculadas juntas.
#[derive(Debug, Clone, Default)]
pub struct OrderBoard {
    pub orders: Vec<Order>,
    pub counts: StatusCounts,
}

#[derive(Clone)]
pub struct OrderService {
    repo: OrderRepository,
}

impl OrderService {
    pub fn new(repo: OrderRepository) -> Self {
        Self { repo }
    }

    pub async fn fetch_board(&self, session: &AuthenticatedSession) -> Result<OrderBoard, AppError> {
        let orders = self.repo.get_all_orders(session.token()).await?;
        let counts = status_counts(&orders);
        tracing::info!("📦 {} pedidos carregados", orders.len());
        Ok(OrderBoard { orders, counts })
    }

    /// Envia o status escolhido. Sem validação de transição: quem decide é o backend.
    pub async fn update_status(
        &self,
        session: &AuthenticatedSession,
        _guard: &RequireRole<StaffOnly>,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<(), AppError> {
        let resp = self
            .repo
            .update_order_status(session.token(), order_id, status)
            .await?;

        if !resp.is_ok() {
            return Err(AppError::UnexpectedResponse(format!(
                "PUT /orders/{order_id}/status devolveu status={}",
                resp.status
            )));
        }

        tracing::info!("✅ Pedido {} agora está {}", order_id, status);
        Ok(())
    }
}

// ---
// Estado derivado (funções puras)
// ---

/// Uma passada pela lista; as seis chaves começam em zero.
pub fn status_counts(orders: &[Order]) -> StatusCounts {
    let mut counts = StatusCounts::zeroed();
    for order in orders {
        counts.increment(order.status);
    }
    counts
}

pub fn filter_by_tab(orders: &[Order], tab: OrderTab) -> Vec<&Order> {
    match tab {
        OrderTab::All => orders.iter().collect(),
        OrderTab::Status(status) => orders.iter().filter(|o| o.status == status).collect(),
    }
}

/// Ordena por id decrescente (sort estável, sem chave secundária).
pub fn sort_by_id_desc(orders: &mut [&Order]) {
    orders.sort_by(|a, b| b.id.cmp(&a.id));
}

/// O que a tabela mostra: filtro da aba e depois a ordenação.
pub fn visible_orders(orders: &[Order], tab: OrderTab) -> Vec<&Order> {
    let mut visible = filter_by_tab(orders, tab);
    sort_by_id_desc(&mut visible);
    visible
}
