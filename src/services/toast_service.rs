use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::toast::{Toast, ToastKind};
use crate::utils::time::{add_std, now};

/// Queue of transient user notifications. Expiry is evaluated whenever the
/// queue is touched, never by a timer.
#[derive(Clone, Debug)]
pub struct ToastQueue {
    ttl: Duration,
    queue: Arc<Mutex<VecDeque<Toast>>>,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            queue: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn success(&self, message: impl Into<String>) -> Toast {
        self.push_at(message, ToastKind::Success, now())
    }

    pub fn error(&self, message: impl Into<String>) -> Toast {
        self.push_at(message, ToastKind::Error, now())
    }

    pub fn push_at(&self, message: impl Into<String>, kind: ToastKind, at: DateTime<Utc>) -> Toast {
        let toast = Toast {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            created_at: at,
            expires_at: add_std(at, self.ttl),
        };
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        queue.retain(|t| !t.is_expired(at));
        queue.push_back(toast.clone());
        toast
    }

    /// Drops expired toasts and returns the rest, oldest first.
    pub fn active_at(&self, at: DateTime<Utc>) -> Vec<Toast> {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        queue.retain(|t| !t.is_expired(at));
        queue.iter().cloned().collect()
    }

    pub fn active(&self) -> Vec<Toast> {
        self.active_at(now())
    }

    pub fn dismiss(&self, id: Uuid) -> bool {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        let before = queue.len();
        queue.retain(|t| t.id != id);
        queue.len() != before
    }
}
