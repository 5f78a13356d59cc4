use serde::{Deserialize, Serialize};
use std::fmt;

/// 订单状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// 待支付
    Pending,
    /// 已支付
    Paid,
    /// 已发货
    Delivered,
    /// 已取消
    Cancelled,
    /// 已退款
    Refunded,
    /// 其他未识别状态
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// 只有已支付或已发货的订单允许退款
    pub fn is_refundable(&self) -> bool {
        matches!(self, OrderStatus::Paid | OrderStatus::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Paid => write!(f, "paid"),
            OrderStatus::Delivered => write!(f, "delivered"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
            OrderStatus::Refunded => write!(f, "refunded"),
            OrderStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// 退款控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundControl {
    /// 查询支付渠道退款状态
    Verify,
    /// 跳转支付渠道手动退款
    Refund,
    /// 代理退款
    ProxyRefund,
    /// 人工确认已退款
    MarkRefunded,
}

impl fmt::Display for RefundControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefundControl::Verify => write!(f, "verify"),
            RefundControl::Refund => write!(f, "refund"),
            RefundControl::ProxyRefund => write!(f, "proxy_refund"),
            RefundControl::MarkRefunded => write!(f, "mark_refunded"),
        }
    }
}

/// 支付渠道返回的退款状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderRefundStatus {
    /// status = 0
    Refunded,
    /// status = 1
    StillPaid,
    /// 其他状态，附带渠道原始消息
    Other(String),
}

impl ProviderRefundStatus {
    pub fn from_code(code: Option<i64>, msg: &str) -> Self {
        match code {
            Some(0) => ProviderRefundStatus::Refunded,
            Some(1) => ProviderRefundStatus::StillPaid,
            _ => ProviderRefundStatus::Other(msg.to_string()),
        }
    }
}
