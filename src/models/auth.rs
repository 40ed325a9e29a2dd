// src/models/auth.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

// Papéis que o backend atribui aos usuários do painel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Staff,
    Admin,
    Customer,
    // Qualquer papel novo que o backend invente cai aqui
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Staff => "STAFF",
            Role::Admin => "ADMIN",
            Role::Customer => "CUSTOMER",
            Role::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "STAFF" => Role::Staff,
            "ADMIN" => Role::Admin,
            "CUSTOMER" => Role::Customer,
            _ => Role::Unknown,
        })
    }
}

// O "currentUser" da sessão de admin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub username: String,
    pub role: Role,
}

// Sessão do admin: token + usuário
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: AdminUser,
}
