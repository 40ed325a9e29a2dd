// src/common/notifier.rs

// Notificações "toast": dispara e esquece. Quem consome o canal decide como
// mostrar (a CLI imprime; os testes inspecionam).

use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

pub type NotificationReceiver = mpsc::UnboundedReceiver<Notification>;

#[derive(Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl Notifier {
    pub fn channel() -> (Self, NotificationReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    fn push(&self, kind: NotificationKind, message: String) {
        // Sem ninguém ouvindo a notificação simplesmente se perde.
        if self.tx.send(Notification { kind, message }).is_err() {
            tracing::debug!("Notificação descartada: receptor fechado");
        }
    }
}
