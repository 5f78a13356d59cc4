use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::RefundParams;
use crate::infrastructure::config::StorefrontConfig;
use crate::ports::{OrderActionsPort, ProxyRefundResult, VerifyResult};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error};

/// 店铺后台订单操作适配器
#[derive(Clone)]
pub struct HttpOrderActionsAdapter {
    config: Arc<StorefrontConfig>,
    client: Client,
}

impl HttpOrderActionsAdapter {
    pub fn new(config: Arc<StorefrontConfig>) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// {base}/api/admin/orders/{order_id}/{action}，订单号按路径段编码
    fn action_url(&self, order_id: &str, action: &str) -> DomainResult<Url> {
        let mut url = Url::parse(&self.config.base_url).map_err(|e| {
            DomainError::ConfigurationError(format!("Invalid STOREFRONT_BASE_URL: {}", e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                DomainError::ConfigurationError("STOREFRONT_BASE_URL cannot be a base".to_string())
            })?
            .pop_if_empty()
            .extend(["api", "admin", "orders", order_id, action]);

        Ok(url)
    }

    async fn post(&self, order_id: &str, action: &str) -> DomainResult<Response> {
        let url = self.action_url(order_id, action)?;
        debug!("Storefront request: POST {}", url);

        let mut request = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .body("{}");
        if let Some(token) = &self.config.admin_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Storefront {} rejected for {}: {} - {}", action, order_id, status, error_text);
            return Err(DomainError::ActionRejected(rejection_message(
                status,
                &error_text,
            )));
        }

        Ok(response)
    }

    async fn post_json<T: DeserializeOwned>(&self, order_id: &str, action: &str) -> DomainResult<T> {
        let response = self.post(order_id, action).await?;
        let body = response.text().await?;
        debug!("Storefront {} response: {}", action, body);
        Ok(serde_json::from_str(&body)?)
    }
}

/// 优先取JSON中的error/message字段，其次原文，最后状态行
fn rejection_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["error", "message"] {
            if let Some(message) = json[field].as_str().filter(|m| !m.is_empty()) {
                return message.to_string();
            }
        }
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    status.to_string()
}

#[async_trait]
impl OrderActionsPort for HttpOrderActionsAdapter {
    async fn get_refund_params(&self, order_id: &str) -> DomainResult<RefundParams> {
        self.post_json(order_id, "refund-params").await
    }

    async fn proxy_refund(&self, order_id: &str) -> DomainResult<ProxyRefundResult> {
        self.post_json(order_id, "proxy-refund").await
    }

    async fn mark_order_refunded(&self, order_id: &str) -> DomainResult<()> {
        self.post(order_id, "mark-refunded").await?;
        Ok(())
    }

    async fn verify_order_refund_status(&self, order_id: &str) -> DomainResult<VerifyResult> {
        self.post_json(order_id, "verify-refund").await
    }
}
