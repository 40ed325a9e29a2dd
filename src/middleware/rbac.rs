// src/middleware/rbac.rs

use std::marker::PhantomData;

use crate::{
    common::error::AppError,
    middleware::auth::AuthenticatedSession,
    models::auth::{AdminUser, Role},
};

/// 1. O Trait que define qual papel uma ação exige
pub trait RoleDef: Send + Sync + 'static {
    fn role() -> Role;
}

/// 2. O Guardião: só existe se o papel bateu.
///
/// Serviços que mutam estado pedem um `&RequireRole<_>` como prova de que a
/// checagem foi feita antes de qualquer requisição sair. É só espelho da
/// regra: o backend continua sendo quem decide.
pub struct RequireRole<T>(PhantomData<T>);

impl<T: RoleDef> RequireRole<T> {
    pub fn check(session: &AuthenticatedSession) -> Result<Self, AppError> {
        if !Self::allows(session.user()) {
            tracing::warn!(
                "🚫 Usuário '{}' ({}) tentou ação que exige {}",
                session.user().username,
                session.user().role,
                T::role()
            );
            return Err(AppError::Forbidden { required: T::role() });
        }
        Ok(RequireRole(PhantomData))
    }

    /// Usado também para esconder botões (ex.: editar status só para STAFF).
    pub fn allows(user: &AdminUser) -> bool {
        user.role == T::role()
    }
}

// ---
// DEFINIÇÃO DOS PAPÉIS (TIPOS)
// ---

pub struct StaffOnly;
impl RoleDef for StaffOnly {
    fn role() -> Role { Role::Staff }
}
