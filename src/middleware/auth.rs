// src/middleware/auth.rs

use crate::{
    common::error::AppError,
    models::auth::{AdminUser, Session},
    store::AdminStore,
};

// "Extrator" da sessão autenticada. Sem token a página não monta
// (no painel web isso virava redirect para /admin/auth/login).
#[derive(Debug, Clone)]
pub struct AuthenticatedSession(pub Session);

impl AuthenticatedSession {
    pub fn from_store(store: &AdminStore) -> Result<Self, AppError> {
        store
            .session()
            .filter(|s| !s.token.trim().is_empty())
            .map(AuthenticatedSession)
            .ok_or(AppError::Unauthenticated)
    }

    pub fn token(&self) -> &str {
        &self.0.token
    }

    pub fn user(&self) -> &AdminUser {
        &self.0.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::Role;

    #[test]
    fn missing_or_blank_token_is_unauthenticated() {
        let store = AdminStore::default();
        assert!(matches!(
            AuthenticatedSession::from_store(&store),
            Err(AppError::Unauthenticated)
        ));

        store.login(Session {
            token: "  ".into(),
            user: AdminUser { username: "x".into(), role: Role::Staff },
        });
        assert!(AuthenticatedSession::from_store(&store).is_err());
    }
}
