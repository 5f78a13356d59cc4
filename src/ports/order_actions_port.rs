use crate::domain::errors::DomainResult;
use crate::domain::{ProviderRefundStatus, RefundParams};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// 代理退款结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyRefundResult {
    pub processed: bool,
}

/// 退款状态查询结果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyResult {
    pub success: bool,

    /// 0 已退款，1 仍为已支付，其他为渠道未识别状态
    ///
    /// 渠道可能返回字符串或浮点数，保留原值，只有整数0/1才被识别
    #[serde(default)]
    pub status: Option<serde_json::Value>,

    #[serde(default)]
    pub msg: String,

    #[serde(default)]
    pub error: Option<String>,
}

impl VerifyResult {
    pub fn provider_status(&self) -> ProviderRefundStatus {
        let code = self.status.as_ref().and_then(serde_json::Value::as_i64);
        ProviderRefundStatus::from_code(code, &self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> VerifyResult {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_integer_status_codes() {
        assert_eq!(
            parse(r#"{"success":true,"status":0}"#).provider_status(),
            ProviderRefundStatus::Refunded
        );
        assert_eq!(
            parse(r#"{"success":true,"status":1}"#).provider_status(),
            ProviderRefundStatus::StillPaid
        );
    }

    #[test]
    fn test_non_integer_status_falls_back_to_message() {
        for body in [
            r#"{"success":true,"status":"2","msg":"refund frozen"}"#,
            r#"{"success":true,"status":"0","msg":"refund frozen"}"#,
            r#"{"success":true,"status":1.5,"msg":"refund frozen"}"#,
            r#"{"success":true,"status":null,"msg":"refund frozen"}"#,
            r#"{"success":true,"msg":"refund frozen"}"#,
        ] {
            assert_eq!(
                parse(body).provider_status(),
                ProviderRefundStatus::Other("refund frozen".to_string()),
                "{}",
                body
            );
        }
    }
}

/// 订单后台操作端口
#[async_trait]
pub trait OrderActionsPort: Send + Sync + 'static {
    /// 获取退款表单参数
    async fn get_refund_params(&self, order_id: &str) -> DomainResult<RefundParams>;

    /// 代理退款
    async fn proxy_refund(&self, order_id: &str) -> DomainResult<ProxyRefundResult>;

    /// 标记订单已退款
    async fn mark_order_refunded(&self, order_id: &str) -> DomainResult<()>;

    /// 向支付渠道查询退款状态
    async fn verify_order_refund_status(&self, order_id: &str) -> DomainResult<VerifyResult>;
}
