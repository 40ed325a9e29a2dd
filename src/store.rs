// src/store.rs

// Estado global do painel: sessão do admin e a última lista de quartos.
// Vive dentro do AdminContext e é passado explicitamente para as páginas.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{
    auth::{AdminUser, Session},
    room::Room,
};

#[derive(Debug, Default)]
struct StoreState {
    session: Option<Session>,
    rooms: Vec<Room>,
}

#[derive(Clone, Default)]
pub struct AdminStore {
    inner: Arc<RwLock<StoreState>>,
}

impl AdminStore {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreState {
                session,
                rooms: Vec::new(),
            })),
        }
    }

    // Um writer que entrou em pânico não invalida os dados (só troca ponteiros).
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn session(&self) -> Option<Session> {
        self.read().session.clone()
    }

    pub fn current_user(&self) -> Option<AdminUser> {
        self.read().session.as_ref().map(|s| s.user.clone())
    }

    pub fn login(&self, session: Session) {
        self.write().session = Some(session);
    }

    /// Logout: derruba a sessão e a cópia dos quartos.
    pub fn clear(&self) {
        let mut state = self.write();
        state.session = None;
        state.rooms.clear();
    }

    pub fn set_rooms(&self, rooms: Vec<Room>) {
        self.write().rooms = rooms;
    }

    pub fn rooms(&self) -> Vec<Room> {
        self.read().rooms.clone()
    }
}
