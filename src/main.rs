// src/main.rs

use fnest_admin::{
    common::{
        error::{AppError, form_errors},
        format::{format_date, format_price},
        notifier::{NotificationKind, NotificationReceiver},
    },
    handlers::{orders::OrdersPage, rooms::RoomsPage, sales::SalesPage, session},
    models::{
        order::{OrderStatus, OrderTab},
        room::ImageUpload,
    },
    AdminContext, AppConfig,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
uso: fnest-admin <comando>

  orders [ABA]                       lista pedidos (ABA: all, PENDING, CONFIRMED, ...)
  order-status <ID> <STATUS>         troca o status de um pedido (só STAFF)
  rooms [BUSCA]                      lista quartos
  room-add <NOME> <IMAGEM>           adiciona um quarto
  room-update <ID> <NOME> <IMAGEM>   atualiza um quarto
  room-delete <ID>                   remove um quarto
  stats [MÊS] [ANO]                  faturamento do mês
  logout                             encerra a sessão";

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        println!("{USAGE}");
        return;
    };

    // Se a configuração falhar, a aplicação não deve iniciar.
    let config = AppConfig::from_env().expect("Falha ao carregar a configuração.");
    let (ctx, mut notifications) =
        AdminContext::new(&config).expect("Falha ao inicializar o contexto da aplicação.");

    if let Err(err) = run(&ctx, command, &args[1..]).await {
        match err {
            AppError::Unauthenticated => eprintln!("Sessão ausente: defina ADMIN_TOKEN."),
            AppError::ValidationError(ref errors) => {
                for (field, message) in form_errors(errors) {
                    eprintln!("{field}: {message}");
                }
            }
            other => eprintln!("{other}"),
        }
    }

    drain(&mut notifications);
}

async fn run(ctx: &AdminContext, command: &str, args: &[String]) -> Result<(), AppError> {
    match command {
        "orders" => {
            let mut page = OrdersPage::new(ctx.clone());
            page.mount().await?;
            if let Some(tab) = args.first() {
                page.set_active_tab(tab.parse::<OrderTab>().map_err(anyhow::Error::from)?);
            }

            for status in OrderStatus::ALL {
                print!("{} ({})  ", status.label(), page.counts().get(status));
            }
            println!("Tất cả ({})", page.total_count());

            for order in page.visible_orders() {
                println!(
                    "#{:<6} {:<12} {:<11} {:>16}  {}",
                    order.id,
                    format_date(order.created_at),
                    order.status,
                    format_price(order.total),
                    order
                        .delivery_address
                        .as_ref()
                        .map(|a| a.delivery_address.as_str())
                        .unwrap_or_default()
                );
            }
        }
        "order-status" => {
            let (id, status) = match args {
                [id, status, ..] => (
                    parse_id(id)?,
                    status.parse::<OrderStatus>().map_err(anyhow::Error::from)?,
                ),
                _ => return usage(),
            };
            let mut page = OrdersPage::new(ctx.clone());
            page.mount().await?;
            let current = page
                .orders()
                .iter()
                .find(|o| o.id == id)
                .map(|o| o.status)
                .unwrap_or(status);
            page.open_status_dialog(id, current);
            page.select_target_status(status);
            page.submit_status_update().await;
        }
        "rooms" => {
            let mut page = RoomsPage::new(ctx.clone());
            page.mount().await?;
            if let Some(text) = args.first() {
                page.set_filter_text(text.as_str());
            }
            for room in page.filtered_rooms() {
                println!(
                    "#{:<6} {:<30} {}",
                    room.id,
                    room.name(),
                    room.image.as_deref().unwrap_or_default()
                );
            }
        }
        "room-add" | "room-update" => {
            let mut page = RoomsPage::new(ctx.clone());
            page.mount().await?;
            let (name, image) = match (command, args) {
                ("room-add", [name, image, ..]) => {
                    page.open_add_dialog();
                    (name, image)
                }
                ("room-update", [id, name, image, ..]) => {
                    page.open_edit_dialog(parse_id(id)?);
                    (name, image)
                }
                _ => return usage(),
            };
            page.set_name(name.as_str());
            page.set_image(ImageUpload::from_path(image).await?);
            if !page.submit_form().await {
                for (field, message) in page.form_errors() {
                    eprintln!("{field}: {message}");
                }
            }
        }
        "room-delete" => {
            let [id, ..] = args else {
                return usage();
            };
            let mut page = RoomsPage::new(ctx.clone());
            page.mount().await?;
            page.delete_room(parse_id(id)?).await;
        }
        "stats" => {
            let month: Option<u32> = args.first().map(|m| parse_number(m)).transpose()?;
            let year: Option<i32> = args.get(1).map(|y| parse_number(y)).transpose()?;
            let mut page = match (month, year) {
                (None, None) => SalesPage::new(ctx.clone()),
                (month, year) => SalesPage::with_period(ctx.clone(), month, year),
            };
            page.mount().await?;
            match page.income() {
                Some(income) => println!(
                    "Tổng doanh thu {:02}/{}: {}",
                    page.selected_month().unwrap_or_default(),
                    page.selected_year().unwrap_or_default(),
                    format_price(income)
                ),
                None => println!("Sem dados de faturamento."),
            }
        }
        "logout" => session::logout(ctx),
        _ => return usage(),
    }
    Ok(())
}

fn usage() -> Result<(), AppError> {
    println!("{USAGE}");
    Ok(())
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    parse_number(raw)
}

fn parse_number<T>(raw: &str) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| anyhow::Error::new(e).context(format!("número inválido: {raw}")).into())
}

fn drain(notifications: &mut NotificationReceiver) {
    while let Ok(notification) = notifications.try_recv() {
        match notification.kind {
            NotificationKind::Success => println!("✔ {}", notification.message),
            NotificationKind::Error => eprintln!("✘ {}", notification.message),
        }
    }
}
