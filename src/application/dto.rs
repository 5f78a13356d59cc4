use crate::domain::Notification;
use serde::{Deserialize, Serialize};

/// 单个按钮的渲染信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlView {
    pub label: String,
    pub enabled: bool,
}

/// 退款控件渲染结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefundControls {
    /// 是否有操作正在进行（前端显示加载图标）
    pub busy: bool,

    pub verify: ControlView,

    pub refund: ControlView,

    pub proxy_refund: ControlView,

    /// 仅在等待人工确认时出现
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_refunded: Option<ControlView>,
}

/// 挂载会话响应
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: uuid::Uuid,

    pub order_id: String,

    /// 订单不可退款时为null
    pub controls: Option<RefundControls>,
}

/// 操作请求：操作员对确认框的回答
#[derive(Debug, Default, Deserialize)]
pub struct ConsoleActionRequest {
    #[serde(default)]
    pub confirmed: bool,
}

/// 操作响应
#[derive(Debug, Serialize)]
pub struct ConsoleResponse {
    pub controls: Option<RefundControls>,

    pub notifications: Vec<Notification>,

    /// 需要在新标签页打开的自动提交页面
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_form_html: Option<String>,
}

/// 错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: String, message: String) -> Self {
        Self { error, message }
    }
}
