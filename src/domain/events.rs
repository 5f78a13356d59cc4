use crate::domain::value_objects::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 领域事件trait
pub trait DomainEvent {
    fn event_type(&self) -> &'static str;
}

/// 操作员提示（toast）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub severity: Severity,
    pub message: String,
}

impl DomainEvent for Notification {
    fn event_type(&self) -> &'static str {
        match self.severity {
            Severity::Info => "notification.info",
            Severity::Success => "notification.success",
            Severity::Error => "notification.error",
        }
    }
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            severity,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }
}
