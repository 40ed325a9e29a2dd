// src/handlers/session.rs

use crate::{config::AdminContext, models::auth::AdminUser};

pub const LOGOUT_MESSAGE: &str = "Đăng xuất tài khoản thành công!";

pub fn current_user(ctx: &AdminContext) -> Option<AdminUser> {
    ctx.store.current_user()
}

/// Derruba a sessão e a cópia dos quartos do store.
pub fn logout(ctx: &AdminContext) {
    if let Some(user) = ctx.store.current_user() {
        tracing::info!("👋 Logout de '{}'", user.username);
    }
    ctx.store.clear();
    ctx.notifier.success(LOGOUT_MESSAGE);
}
