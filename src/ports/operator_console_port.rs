use crate::domain::errors::DomainResult;
use crate::domain::{ExternalForm, Notification};
use async_trait::async_trait;

/// 操作员界面端口：确认框、提示、外部表单
#[async_trait]
pub trait OperatorConsolePort: Send + Sync {
    /// 弹出确认框，只有明确确认才返回true
    async fn confirm(&self, prompt: &str) -> bool;

    /// 显示提示
    fn notify(&self, notification: Notification);

    /// 在新标签页提交外部表单，不等待支付渠道响应
    async fn open_external_form(&self, form: ExternalForm) -> DomainResult<()>;
}
