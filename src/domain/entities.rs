use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{OrderStatus, RefundControl};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 后台订单（只读，由店铺后台提供）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// 订单号
    pub order_id: String,

    /// 订单状态
    pub status: OrderStatus,

    /// 支付渠道交易号
    #[serde(default)]
    pub trade_no: Option<String>,
}

impl Order {
    pub fn new(order_id: impl Into<String>, status: OrderStatus, trade_no: Option<String>) -> Self {
        Self {
            order_id: order_id.into(),
            status,
            trade_no,
        }
    }

    /// 退款控件是否渲染：状态为已支付/已发货，且存在交易号
    pub fn is_refundable(&self) -> bool {
        self.status.is_refundable()
            && self
                .trade_no
                .as_deref()
                .is_some_and(|trade_no| !trade_no.is_empty())
    }
}

/// 退款流程状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RefundWorkflowState {
    /// 是否有远程调用正在进行
    pub busy: bool,

    /// 是否等待人工确认退款完成
    pub awaiting_manual_confirmation: bool,
}

impl RefundWorkflowState {
    /// 确认已退款按钮只在等待人工确认时显示
    pub fn is_shown(&self, control: RefundControl) -> bool {
        match control {
            RefundControl::MarkRefunded => self.awaiting_manual_confirmation,
            _ => true,
        }
    }

    pub fn is_enabled(&self, control: RefundControl) -> bool {
        self.check(control).is_ok()
    }

    /// 检查控件当前是否可触发
    pub fn check(&self, control: RefundControl) -> DomainResult<()> {
        let reason = if self.busy {
            Some("an operation is in flight")
        } else {
            match control {
                RefundControl::Refund | RefundControl::ProxyRefund
                    if self.awaiting_manual_confirmation =>
                {
                    Some("awaiting manual confirmation")
                }
                RefundControl::MarkRefunded if !self.awaiting_manual_confirmation => {
                    Some("no refund awaits confirmation")
                }
                _ => None,
            }
        };

        match reason {
            Some(reason) => Err(DomainError::ControlDisabled {
                control: control.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// 退款参数（来自订单后台，原样作为表单字段提交）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "serde_json::Map<String, serde_json::Value>")]
pub struct RefundParams(BTreeMap<String, String>);

impl RefundParams {
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for RefundParams {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        let fields = map
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect();
        Self(fields)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RefundParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// 提交到外部支付渠道的表单，由操作员界面在新标签页打开，不关心响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalForm {
    pub method: String,
    pub action: String,
    pub fields: RefundParams,
}

impl ExternalForm {
    pub fn post(action: impl Into<String>, fields: RefundParams) -> Self {
        Self {
            method: "POST".to_string(),
            action: action.into(),
            fields,
        }
    }
}
