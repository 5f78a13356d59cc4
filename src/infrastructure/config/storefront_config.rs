use crate::application::session::DEFAULT_SESSION_IDLE_TTL;
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::adapters::catalog_translator::Locale;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// 默认退款网关（EPay）
pub const DEFAULT_REFUND_GATEWAY_URL: &str = "https://credit.linux.do/epay/api.php";

/// 店铺后台配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// 店铺后台API基础URL
    pub base_url: String,

    /// 后台管理令牌
    pub admin_token: Option<String>,

    /// 手动退款表单提交地址
    pub refund_gateway_url: String,

    /// 提示文案语言
    pub locale: Locale,

    /// 退款会话空闲过期时间
    pub session_idle_ttl: Duration,
}

impl StorefrontConfig {
    pub fn from_env() -> DomainResult<Arc<Self>> {
        Self::from_lookup(|key| std::env::var(key).ok()).map(Arc::new)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let base_url = lookup("STOREFRONT_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                DomainError::ConfigurationError("STOREFRONT_BASE_URL must be set".to_string())
            })?;

        let locale = match lookup("CONSOLE_LOCALE") {
            Some(value) => Locale::parse(&value).ok_or_else(|| {
                DomainError::ConfigurationError(format!("Unsupported CONSOLE_LOCALE: {}", value))
            })?,
            None => Locale::En,
        };

        let session_idle_ttl = match lookup("REFUND_SESSION_IDLE_TTL_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or_else(|| {
                    DomainError::ConfigurationError(format!(
                        "Invalid REFUND_SESSION_IDLE_TTL_SECS: {}",
                        value
                    ))
                })?,
            None => DEFAULT_SESSION_IDLE_TTL,
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            admin_token: lookup("STOREFRONT_ADMIN_TOKEN").filter(|v| !v.is_empty()),
            refund_gateway_url: lookup("REFUND_GATEWAY_URL")
                .unwrap_or_else(|| DEFAULT_REFUND_GATEWAY_URL.to_string()),
            locale,
            session_idle_ttl,
        })
    }
}
