// src/lib.rs

// Console administrativa da FNEST: pedidos, quartos e estatísticas de venda.
// As "páginas" (handlers) guardam o estado de tela e expõem as ações do admin;
// a renderização fica de fora.

pub mod api;
pub mod common;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;

pub use crate::config::{AdminContext, AppConfig};
