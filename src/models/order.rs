// src/models/order.rs

use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// --- Enums ---

// Ciclo de vida do pedido. Quem valida as transições é o backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,     // "PENDING"
    Confirmed,   // "CONFIRMED"
    InShipping,  // "IN_SHIPPING"
    Completed,   // "COMPLETED"
    Reviewed,    // "REVIEWED"
    Canceled,    // "CANCELED"
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::InShipping,
        OrderStatus::Completed,
        OrderStatus::Reviewed,
        OrderStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::InShipping => "IN_SHIPPING",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Reviewed => "REVIEWED",
            OrderStatus::Canceled => "CANCELED",
        }
    }

    /// Rótulo da aba na tela de pedidos.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Chờ xác nhận",
            OrderStatus::Confirmed => "Đã xác nhận",
            OrderStatus::InShipping => "Đang giao",
            OrderStatus::Completed => "Đã giao",
            OrderStatus::Reviewed => "Đã hoàn thành",
            OrderStatus::Canceled => "Đã hủy",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status de pedido desconhecido: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

// Aba ativa da tela de pedidos. "all" mostra a lista sem filtro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderTab {
    #[default]
    All,
    Status(OrderStatus),
}

impl FromStr for OrderTab {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(OrderTab::All);
        }
        s.parse().map(OrderTab::Status)
    }
}

// --- Structs do pedido (como vêm do backend) ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    #[serde(default, deserialize_with = "crate::common::serde_utils::null_as_default")]
    pub receiver_name: String,
    #[serde(default, deserialize_with = "crate::common::serde_utils::null_as_default")]
    pub receiver_phone: String,
    #[serde(default, deserialize_with = "crate::common::serde_utils::null_as_default")]
    pub delivery_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, deserialize_with = "crate::common::serde_utils::null_as_default")]
    pub product_name: String,
    pub product_size: Option<String>,
    pub product_material: Option<String>,
    pub product_thumbnail: Option<String>,
    #[serde(default, deserialize_with = "crate::common::serde_utils::null_as_default")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "crate::common::serde_utils::null_as_default")]
    pub product_price: Decimal,
    #[serde(default, deserialize_with = "crate::common::serde_utils::null_as_default")]
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    #[serde(default, deserialize_with = "crate::common::datetime::deserialize_optional")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "crate::common::datetime::deserialize_optional")]
    pub last_updated_at: Option<NaiveDateTime>,
    pub status: OrderStatus,
    #[serde(default, deserialize_with = "crate::common::serde_utils::null_as_default")]
    pub total: Decimal,
    #[serde(default, deserialize_with = "crate::common::serde_utils::null_as_default")]
    pub code_discount: Decimal,
    #[serde(default, deserialize_with = "crate::common::serde_utils::null_as_default")]
    pub shipping_charge: Decimal,
    pub payment_method: Option<String>,
    pub delivery_address: Option<DeliveryAddress>,
    #[serde(default, deserialize_with = "crate::common::serde_utils::null_as_default")]
    pub order_item_list: Vec<OrderItem>,
}

// Corpo do PUT /orders/{id}/status
#[derive(Debug, Serialize)]
pub struct UpdateStatusPayload {
    pub status: OrderStatus,
}

// Resposta do PUT: { "status": "OK" }
#[derive(Debug, Deserialize)]
pub struct UpdateStatusResponse {
    pub status: String,
}

impl UpdateStatusResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

// --- Estado derivado ---

/// Contagem de pedidos por status. Sempre tem as seis chaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCounts(BTreeMap<OrderStatus, usize>);

impl StatusCounts {
    pub fn zeroed() -> Self {
        Self(OrderStatus::ALL.into_iter().map(|s| (s, 0)).collect())
    }

    pub(crate) fn increment(&mut self, status: OrderStatus) {
        *self.0.entry(status).or_insert(0) += 1;
    }

    pub fn get(&self, status: OrderStatus) -> usize {
        self.0.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (OrderStatus, usize)> + '_ {
        self.0.iter().map(|(status, count)| (*status, *count))
    }
}

impl Default for StatusCounts {
    fn default() -> Self {
        Self::zeroed()
    }
}
