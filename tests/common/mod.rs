// Backend falso da FNEST para os testes de integração.
// Guarda pedidos/quartos em memória e registra cada requisição recebida.

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use fnest_admin::{
    common::notifier::{Notification, NotificationReceiver},
    models::auth::{AdminUser, Role, Session},
    AdminContext, AppConfig,
};

pub const TOKEN: &str = "test-token";

#[derive(Default)]
pub struct StubData {
    pub orders: Vec<Value>,
    pub rooms: Vec<Value>,
    pub requests: Vec<String>,
    pub next_room_id: i64,
    // Próximas respostas de erro forçadas
    pub reject_mutations_with: Option<(StatusCode, Value)>,
    pub fail_reads: bool,
}

#[derive(Clone, Default)]
pub struct StubState {
    inner: Arc<Mutex<StubData>>,
}

impl StubState {
    pub fn with<R>(&self, f: impl FnOnce(&mut StubData) -> R) -> R {
        f(&mut self.inner.lock().unwrap())
    }

    pub fn requests(&self) -> Vec<String> {
        self.with(|d| d.requests.clone())
    }

    pub fn room_ids(&self) -> Vec<i64> {
        self.with(|d| d.rooms.iter().map(|r| r["id"].as_i64().unwrap()).collect())
    }

    fn record(&self, line: String) {
        self.with(|d| d.requests.push(line));
    }

    fn forced_error(&self) -> Option<Response> {
        self.with(|d| d.reject_mutations_with.clone())
            .map(|(status, body)| (status, Json(body)).into_response())
    }
}

pub struct StubBackend {
    pub addr: SocketAddr,
    pub state: StubState,
}

impl StubBackend {
    pub async fn start(orders: Vec<Value>, rooms: Vec<Value>) -> Self {
        let state = StubState::default();
        state.with(|d| {
            d.next_room_id = rooms
                .iter()
                .filter_map(|r| r["id"].as_i64())
                .max()
                .unwrap_or(0)
                + 1;
            d.orders = orders;
            d.rooms = rooms;
        });

        let app = Router::new()
            .route("/orders", get(list_orders))
            .route("/orders/{id}/status", put(update_status))
            .route("/rooms", get(list_rooms).post(add_room))
            .route("/rooms/{id}", put(update_room).delete(delete_room))
            .route("/statistics", get(statistics))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn context(&self, role: Role) -> (AdminContext, NotificationReceiver) {
        self.context_with(Some(session(role)), false)
    }

    pub fn context_with(
        &self,
        session: Option<Session>,
        notify_read_failures: bool,
    ) -> (AdminContext, NotificationReceiver) {
        let config = AppConfig {
            api_base_url: format!("http://{}", self.addr),
            session,
            http_timeout: Duration::from_secs(5),
            notify_read_failures,
            use_system_proxy: false,
        };
        AdminContext::new(&config).unwrap()
    }
}

pub fn session(role: Role) -> Session {
    Session {
        token: TOKEN.into(),
        user: AdminUser {
            username: "nhanvien".into(),
            role,
        },
    }
}

pub fn drain(rx: &mut NotificationReceiver) -> Vec<Notification> {
    let mut out = Vec::new();
    while let Ok(n) = rx.try_recv() {
        out.push(n);
    }
    out
}

pub fn order(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "createdAt": "2023-12-01T09:00:00",
        "lastUpdatedAt": "2023-12-02T10:00:00Z",
        "status": status,
        "total": 500000,
        "codeDiscount": 0,
        "shippingCharge": 30000,
        "paymentMethod": "COD",
        "deliveryAddress": {
            "receiverName": "Trần Thị B",
            "receiverPhone": "0911111111",
            "deliveryAddress": "1 Nguyễn Huệ"
        },
        "orderItemList": []
    })
}

pub fn room(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "image": format!("https://cdn/rooms/{id}.png") })
}

// ---
// Handlers do stub
// ---

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "messages": ["Unauthorized"] })),
    )
        .into_response()
}

async fn list_orders(State(state): State<StubState>, headers: HeaderMap) -> Response {
    state.record("GET /orders".into());
    if !authorized(&headers) {
        return unauthorized();
    }
    if state.with(|d| d.fail_reads) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(Value::Array(state.with(|d| d.orders.clone()))).into_response()
}

#[derive(Deserialize)]
struct StatusBody {
    status: String,
}

async fn update_status(
    State(state): State<StubState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<StatusBody>,
) -> Response {
    state.record(format!("PUT /orders/{id}/status {}", body.status));
    if !authorized(&headers) {
        return unauthorized();
    }
    if let Some(resp) = state.forced_error() {
        return resp;
    }
    let found = state.with(|d| {
        d.orders
            .iter_mut()
            .find(|o| o["id"].as_i64() == Some(id))
            .map(|o| o["status"] = Value::String(body.status.clone()))
            .is_some()
    });
    if !found {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "status": "NOT_FOUND" })),
        )
            .into_response();
    }
    Json(json!({ "status": "OK" })).into_response()
}

async fn list_rooms(State(state): State<StubState>) -> Response {
    state.record("GET /rooms".into());
    if state.with(|d| d.fail_reads) {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    Json(Value::Array(state.with(|d| d.rooms.clone()))).into_response()
}

async fn read_room_form(mut multipart: Multipart) -> (Option<String>, Option<(String, usize)>) {
    let mut name = None;
    let mut image = None;
    while let Some(field) = multipart.next_field().await.unwrap() {
        let field_name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await.unwrap();
        match field_name.as_str() {
            "name" => name = Some(String::from_utf8(data.to_vec()).unwrap()),
            "image" => image = Some((file_name, data.len())),
            _ => {}
        }
    }
    (name, image)
}

async fn add_room(
    State(state): State<StubState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    state.record("POST /rooms".into());
    if !authorized(&headers) {
        return unauthorized();
    }
    if let Some(resp) = state.forced_error() {
        return resp;
    }
    let (Some(name), Some((file_name, _))) = read_room_form(multipart).await else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "messages": ["Thiếu dữ liệu"] })),
        )
            .into_response();
    };
    state.with(|d| {
        let id = d.next_room_id;
        d.next_room_id += 1;
        d.rooms.push(json!({ "id": id, "name": name, "image": format!("https://cdn/{file_name}") }));
    });
    Json(json!({ "messages": ["Thêm phòng thành công"] })).into_response()
}

async fn update_room(
    State(state): State<StubState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    state.record(format!("PUT /rooms/{id}"));
    if !authorized(&headers) {
        return unauthorized();
    }
    if let Some(resp) = state.forced_error() {
        return resp;
    }
    let (name, _) = read_room_form(multipart).await;
    let updated = state.with(|d| {
        d.rooms
            .iter_mut()
            .find(|r| r["id"].as_i64() == Some(id))
            .map(|r| r["name"] = json!(name))
            .is_some()
    });
    if !updated {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "messages": ["Không tìm thấy phòng"] })),
        )
            .into_response();
    }
    Json(json!({ "messages": ["Cập nhật phòng thành công"] })).into_response()
}

async fn delete_room(
    State(state): State<StubState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    state.record(format!("DELETE /rooms/{id}"));
    if !authorized(&headers) {
        return unauthorized();
    }
    if let Some(resp) = state.forced_error() {
        return resp;
    }
    let removed = state.with(|d| {
        let before = d.rooms.len();
        d.rooms.retain(|r| r["id"].as_i64() != Some(id));
        before != d.rooms.len()
    });
    if !removed {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "messages": ["Không tìm thấy phòng"] })),
        )
            .into_response();
    }
    Json(json!({ "messages": ["Xóa phòng thành công"] })).into_response()
}

#[derive(Deserialize)]
struct StatisticParams {
    month: u32,
    year: i32,
}

async fn statistics(
    State(state): State<StubState>,
    headers: HeaderMap,
    Query(params): Query<StatisticParams>,
) -> Response {
    state.record(format!("GET /statistics {}/{}", params.month, params.year));
    if !authorized(&headers) {
        return unauthorized();
    }
    if state.with(|d| d.fail_reads) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let income = i64::from(params.month) * 100_000 + i64::from(params.year);
    Json(json!({
        "income": income,
        "dailyIncome": [income / 2, income / 2],
    }))
    .into_response()
}
