use crate::domain::errors::DomainResult;
use crate::domain::{DomainEvent, ExternalForm, Notification};
use crate::ports::OperatorConsolePort;
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// 单次请求的操作员界面
///
/// 确认框的答案由前端随请求带来；提示和外部表单先记录下来，随响应返回给前端。
#[derive(Debug, Default)]
pub struct RecordingConsole {
    confirmed: bool,
    prompts: Mutex<Vec<String>>,
    notifications: Mutex<Vec<Notification>>,
    forms: Mutex<Vec<ExternalForm>>,
}

impl RecordingConsole {
    pub fn new(confirmed: bool) -> Self {
        Self {
            confirmed,
            ..Default::default()
        }
    }

    pub fn confirming() -> Self {
        Self::new(true)
    }

    pub fn declining() -> Self {
        Self::new(false)
    }

    /// 展示过的确认框文案
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        lock(&self.notifications).clone()
    }

    pub fn forms(&self) -> Vec<ExternalForm> {
        lock(&self.forms).clone()
    }

    pub fn into_parts(self) -> (Vec<Notification>, Vec<ExternalForm>) {
        let notifications = self
            .notifications
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let forms = self
            .forms
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        (notifications, forms)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl OperatorConsolePort for RecordingConsole {
    async fn confirm(&self, prompt: &str) -> bool {
        lock(&self.prompts).push(prompt.to_string());
        self.confirmed
    }

    fn notify(&self, notification: Notification) {
        debug!(
            "{} {}: {}",
            notification.event_type(),
            notification.event_id,
            notification.message
        );
        lock(&self.notifications).push(notification);
    }

    async fn open_external_form(&self, form: ExternalForm) -> DomainResult<()> {
        debug!("External form queued for {} with {} fields", form.action, form.fields.len());
        lock(&self.forms).push(form);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RefundParams, Severity};

    #[tokio::test]
    async fn test_records_interactions() {
        let console = RecordingConsole::confirming();

        assert!(console.confirm("Continue?").await);
        console.notify(Notification::success("done"));
        console
            .open_external_form(ExternalForm::post(
                "https://pay.test",
                RefundParams::default(),
            ))
            .await
            .unwrap();

        assert_eq!(console.prompts(), vec!["Continue?".to_string()]);
        let (notifications, forms) = console.into_parts();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].severity, Severity::Success);
        assert_eq!(forms.len(), 1);
    }

    #[tokio::test]
    async fn test_declining_console() {
        let console = RecordingConsole::declining();
        assert!(!console.confirm("Continue?").await);
    }
}
