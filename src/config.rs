// src/config.rs

use std::{env, time::Duration};

use anyhow::Context;

use crate::{
    api::{OrderRepository, RoomRepository, StatisticRepository},
    common::{
        error::AppError,
        notifier::{NotificationReceiver, Notifier},
    },
    models::auth::{AdminUser, Role, Session},
    services::{OrderService, RoomService, StatisticService},
    store::AdminStore,
};

/// Mensagem para falhas de leitura, quando a configuração pede para mostrá-las.
pub const READ_FAILURE_MESSAGE: &str = "Không thể tải dữ liệu.";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session: Option<Session>,
    pub http_timeout: Duration,
    pub notify_read_failures: bool,
    pub use_system_proxy: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("API_BASE_URL").context("API_BASE_URL deve ser definida")?;

        // Sem token a sessão fica vazia e as páginas recusam montar.
        let session = env::var("ADMIN_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .map(|token| Session {
                token,
                user: AdminUser {
                    username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
                    role: env::var("ADMIN_ROLE")
                        .ok()
                        .and_then(|r| r.parse().ok())
                        .unwrap_or(Role::Staff),
                },
            });

        let http_timeout = match env::var("HTTP_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(
                raw.parse()
                    .with_context(|| format!("HTTP_TIMEOUT_SECS inválido: {raw}"))?,
            ),
            Err(_) => Duration::from_secs(10),
        };

        Ok(Self {
            api_base_url,
            session,
            http_timeout,
            notify_read_failures: env_flag("NOTIFY_READ_FAILURES", false),
            use_system_proxy: env_flag("HTTP_USE_SYSTEM_PROXY", true),
        })
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(default)
}

// O contexto compartilhado que é passado para todas as páginas
#[derive(Clone)]
pub struct AdminContext {
    pub store: AdminStore,
    pub notifier: Notifier,
    pub order_service: OrderService,
    pub room_service: RoomService,
    pub statistic_service: StatisticService,
    pub notify_read_failures: bool,
}

impl AdminContext {
    pub fn new(config: &AppConfig) -> anyhow::Result<(Self, NotificationReceiver)> {
        let mut builder = reqwest::Client::builder().timeout(config.http_timeout);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().context("Falha ao criar o cliente HTTP")?;

        tracing::info!("✅ Cliente HTTP pronto para {}", config.api_base_url);

        // --- Monta o gráfico de dependências ---
        let base_url = config.api_base_url.clone();
        let order_service = OrderService::new(OrderRepository::new(client.clone(), base_url.clone()));
        let room_service = RoomService::new(RoomRepository::new(client.clone(), base_url.clone()));
        let statistic_service = StatisticService::new(StatisticRepository::new(client, base_url));

        let (notifier, receiver) = Notifier::channel();

        Ok((
            Self {
                store: AdminStore::new(config.session.clone()),
                notifier,
                order_service,
                room_service,
                statistic_service,
                notify_read_failures: config.notify_read_failures,
            },
            receiver,
        ))
    }

    /// Falha num caminho de leitura: sempre loga, só notifica se configurado.
    pub fn report_read_failure(&self, what: &str, err: &AppError) {
        tracing::warn!("⚠️ Falha ao carregar {}: {}", what, err);
        if self.notify_read_failures {
            self.notifier.error(READ_FAILURE_MESSAGE);
        }
    }
}
