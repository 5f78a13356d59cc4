use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::{ExternalForm, Notification, RefundParams};
use crate::infrastructure::RecordingConsole;
use crate::ports::{OperatorConsolePort, OrderActionsPort, ProxyRefundResult, VerifyResult};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

type Reply<T> = Result<T, String>;

/// 内存版订单后台，拒绝以字符串消息表示
pub struct FakeOrderActions {
    refund_params: Mutex<Reply<RefundParams>>,
    proxy_refund: Mutex<Reply<bool>>,
    mark_refunded: Mutex<Reply<()>>,
    verify: Mutex<Reply<VerifyResult>>,
    hold_verify: bool,
    release: Arc<Notify>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeOrderActions {
    pub fn new() -> Self {
        Self {
            refund_params: Mutex::new(Ok(RefundParams::default())),
            proxy_refund: Mutex::new(Ok(true)),
            mark_refunded: Mutex::new(Ok(())),
            verify: Mutex::new(Ok(VerifyResult {
                success: true,
                status: Some(serde_json::json!(0)),
                ..Default::default()
            })),
            hold_verify: false,
            release: Arc::new(Notify::new()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_refund_params(self, reply: Reply<RefundParams>) -> Self {
        *self.refund_params.lock().unwrap() = reply;
        self
    }

    pub fn with_proxy_refund(self, reply: Reply<bool>) -> Self {
        *self.proxy_refund.lock().unwrap() = reply;
        self
    }

    pub fn with_mark_refunded(self, reply: Reply<()>) -> Self {
        *self.mark_refunded.lock().unwrap() = reply;
        self
    }

    pub fn with_verify(self, reply: Reply<VerifyResult>) -> Self {
        *self.verify.lock().unwrap() = reply;
        self
    }

    /// verify调用挂起，直到release()被通知
    pub fn holding_verify(mut self) -> Self {
        self.hold_verify = true;
        self
    }

    pub fn release(&self) -> Arc<Notify> {
        self.release.clone()
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        self.calls.clone()
    }

    fn record(&self, action: &str, order_id: &str) {
        self.calls.lock().unwrap().push(format!("{}:{}", action, order_id));
    }
}

fn reply<T: Clone>(slot: &Mutex<Reply<T>>) -> DomainResult<T> {
    slot.lock().unwrap().clone().map_err(DomainError::ActionRejected)
}

#[async_trait]
impl OrderActionsPort for FakeOrderActions {
    async fn get_refund_params(&self, order_id: &str) -> DomainResult<RefundParams> {
        self.record("refund_params", order_id);
        reply(&self.refund_params)
    }

    async fn proxy_refund(&self, order_id: &str) -> DomainResult<ProxyRefundResult> {
        self.record("proxy_refund", order_id);
        reply(&self.proxy_refund).map(|processed| ProxyRefundResult { processed })
    }

    async fn mark_order_refunded(&self, order_id: &str) -> DomainResult<()> {
        self.record("mark_refunded", order_id);
        reply(&self.mark_refunded)
    }

    async fn verify_order_refund_status(&self, order_id: &str) -> DomainResult<VerifyResult> {
        self.record("verify", order_id);
        if self.hold_verify {
            self.release.notified().await;
        }
        reply(&self.verify)
    }
}

/// 浏览器拦截弹窗时的操作员界面：外部表单打不开，其余行为同RecordingConsole
pub struct PopupBlockedConsole {
    inner: RecordingConsole,
}

impl PopupBlockedConsole {
    pub fn confirming() -> Self {
        Self {
            inner: RecordingConsole::confirming(),
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.inner.notifications()
    }
}

#[async_trait]
impl OperatorConsolePort for PopupBlockedConsole {
    async fn confirm(&self, prompt: &str) -> bool {
        self.inner.confirm(prompt).await
    }

    fn notify(&self, notification: Notification) {
        self.inner.notify(notification);
    }

    async fn open_external_form(&self, _form: ExternalForm) -> DomainResult<()> {
        Err(DomainError::ActionRejected("popup blocked".to_string()))
    }
}
