use crate::application::{
    ConsoleActionRequest, ConsoleResponse, ErrorResponse, RefundWorkflowService, SessionRegistry,
    SessionResponse,
};
use crate::domain::errors::DomainError;
use crate::domain::{Order, RefundControl};
use crate::infrastructure::{build_auto_submit_page, RecordingConsole};
use crate::ports::{OrderActionsPort, TranslatorPort};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// 应用状态
pub struct AppState<A: OrderActionsPort, T: TranslatorPort> {
    pub workflow: Arc<RefundWorkflowService<A, T>>,
    pub sessions: Arc<SessionRegistry>,
}

impl<A: OrderActionsPort, T: TranslatorPort> Clone for AppState<A, T> {
    fn clone(&self) -> Self {
        Self {
            workflow: self.workflow.clone(),
            sessions: self.sessions.clone(),
        }
    }
}

fn error_response(e: DomainError) -> ApiError {
    let (status, code) = match &e {
        DomainError::SessionNotFound(_) => (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND"),
        DomainError::NotRefundable(_) => (StatusCode::UNPROCESSABLE_ENTITY, "NOT_REFUNDABLE"),
        DomainError::ControlDisabled { .. } => (StatusCode::CONFLICT, "CONTROL_DISABLED"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    };

    if status.is_server_error() {
        error!("Refund console error: {}", e);
    } else {
        warn!("Refund console request rejected: {}", e);
    }

    (status, Json(ErrorResponse::new(code.to_string(), e.to_string())))
}

/// 挂载退款控件
pub async fn open_session<A: OrderActionsPort, T: TranslatorPort>(
    State(state): State<AppState<A, T>>,
    Json(order): Json<Order>,
) -> impl IntoResponse {
    info!(
        "Opening refund session for order: {} ({})",
        order.order_id, order.status
    );

    let session = state.sessions.open(order);
    let response = SessionResponse {
        session_id: session.id(),
        order_id: session.order().order_id.clone(),
        controls: state.workflow.render(&session),
    };

    (StatusCode::CREATED, Json(response))
}

/// 渲染当前控件
pub async fn get_session<A: OrderActionsPort, T: TranslatorPort>(
    State(state): State<AppState<A, T>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state.sessions.get(session_id).map_err(error_response)?;

    Ok(Json(SessionResponse {
        session_id,
        order_id: session.order().order_id.clone(),
        controls: state.workflow.render(&session),
    }))
}

/// 卸载退款控件
pub async fn close_session<A: OrderActionsPort, T: TranslatorPort>(
    State(state): State<AppState<A, T>>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.sessions.close(session_id).map_err(error_response)?;
    info!("Refund session closed: {}", session_id);
    Ok(StatusCode::NO_CONTENT)
}

/// 查询退款状态
pub async fn verify_refund<A: OrderActionsPort, T: TranslatorPort>(
    State(state): State<AppState<A, T>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ConsoleResponse>, ApiError> {
    run_action(&state, session_id, RefundControl::Verify, false).await
}

/// 手动退款
pub async fn start_refund<A: OrderActionsPort, T: TranslatorPort>(
    State(state): State<AppState<A, T>>,
    Path(session_id): Path<Uuid>,
    request: Option<Json<ConsoleActionRequest>>,
) -> Result<Json<ConsoleResponse>, ApiError> {
    run_action(&state, session_id, RefundControl::Refund, confirmed(request)).await
}

/// 代理退款
pub async fn proxy_refund<A: OrderActionsPort, T: TranslatorPort>(
    State(state): State<AppState<A, T>>,
    Path(session_id): Path<Uuid>,
    request: Option<Json<ConsoleActionRequest>>,
) -> Result<Json<ConsoleResponse>, ApiError> {
    run_action(&state, session_id, RefundControl::ProxyRefund, confirmed(request)).await
}

/// 确认已退款
pub async fn mark_refunded<A: OrderActionsPort, T: TranslatorPort>(
    State(state): State<AppState<A, T>>,
    Path(session_id): Path<Uuid>,
    request: Option<Json<ConsoleActionRequest>>,
) -> Result<Json<ConsoleResponse>, ApiError> {
    run_action(&state, session_id, RefundControl::MarkRefunded, confirmed(request)).await
}

/// 健康检查
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

fn confirmed(request: Option<Json<ConsoleActionRequest>>) -> bool {
    request.map(|Json(r)| r.confirmed).unwrap_or(false)
}

async fn run_action<A: OrderActionsPort, T: TranslatorPort>(
    state: &AppState<A, T>,
    session_id: Uuid,
    control: RefundControl,
    confirmed: bool,
) -> Result<Json<ConsoleResponse>, ApiError> {
    let session = state.sessions.get(session_id).map_err(error_response)?;
    info!("Received {} request for session: {}", control, session_id);

    let console = RecordingConsole::new(confirmed);
    let workflow = &state.workflow;
    match control {
        RefundControl::Verify => workflow.handle_verify(&session, &console).await,
        RefundControl::Refund => workflow.handle_refund(&session, &console).await,
        RefundControl::ProxyRefund => workflow.handle_proxy_refund(&session, &console).await,
        RefundControl::MarkRefunded => workflow.handle_mark_done(&session, &console).await,
    }
    .map_err(error_response)?;

    let (notifications, forms) = console.into_parts();
    Ok(Json(ConsoleResponse {
        controls: workflow.render(&session),
        notifications,
        external_form_html: forms
            .last()
            .map(|form| build_auto_submit_page(form).into_string()),
    }))
}
