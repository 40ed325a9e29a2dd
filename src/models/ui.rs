// src/models/ui.rs

// Visibilidade do modal de uma página. Substitui o showModal()/close() do DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Add,
    Edit(i64),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn editing_id(&self) -> Option<i64> {
        match self {
            ModalState::Edit(id) => Some(*id),
            _ => None,
        }
    }
}
