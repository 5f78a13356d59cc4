use thiserror::Error;

/// 领域层错误类型
#[derive(Error, Debug)]
pub enum DomainError {
    /// 订单操作被后台拒绝（消息原样展示给操作员）
    #[error("{0}")]
    ActionRejected(String),

    /// 退款会话未找到
    #[error("Refund session not found: {0}")]
    SessionNotFound(String),

    /// 订单不满足退款条件，控件不渲染
    #[error("Order {0} is not refundable")]
    NotRefundable(String),

    /// 控件当前不可用（处理中或等待人工确认）
    #[error("Control {control} is disabled: {reason}")]
    ControlDisabled { control: String, reason: String },

    /// 序列化错误
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// HTTP请求错误
    #[error("{0}")]
    HttpError(#[from] reqwest::Error),

    /// 配置错误
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// 领域结果类型
pub type DomainResult<T> = Result<T, DomainError>;
