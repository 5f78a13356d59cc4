use crate::application::dto::{ControlView, RefundControls};
use crate::application::session::RefundSession;
use crate::domain::errors::DomainResult;
use crate::domain::{ExternalForm, Notification, ProviderRefundStatus, RefundControl};
use crate::ports::translator_port::keys;
use crate::ports::{OperatorConsolePort, OrderActionsPort, TranslatorPort};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// 退款流程服务
///
/// 每个操作先检查控件可用，再（按需）弹出确认框，然后置busy并调用订单后台。
/// 远程调用的失败只会变成错误提示，不会从这里返回；返回的错误只表示
/// 操作员触发了一个界面上本不可点击的控件。
pub struct RefundWorkflowService<A: OrderActionsPort, T: TranslatorPort> {
    order_actions: Arc<A>,
    translator: Arc<T>,
    gateway_url: String,
}

impl<A: OrderActionsPort, T: TranslatorPort> RefundWorkflowService<A, T> {
    pub fn new(order_actions: Arc<A>, translator: Arc<T>, gateway_url: impl Into<String>) -> Self {
        Self {
            order_actions,
            translator,
            gateway_url: gateway_url.into(),
        }
    }

    /// 渲染控件；订单不可退款时不渲染
    pub fn render(&self, session: &RefundSession) -> Option<RefundControls> {
        if !session.order().is_refundable() {
            return None;
        }

        let state = session.state();
        let view = |control: RefundControl, key: &str| ControlView {
            label: self.translator.t(key),
            enabled: state.is_enabled(control),
        };

        Some(RefundControls {
            busy: state.busy,
            verify: view(RefundControl::Verify, keys::CHECK_STATUS),
            refund: view(RefundControl::Refund, keys::REFUND),
            proxy_refund: view(RefundControl::ProxyRefund, keys::REFUND_PROXY),
            mark_refunded: state
                .is_shown(RefundControl::MarkRefunded)
                .then(|| view(RefundControl::MarkRefunded, keys::MARK_REFUNDED)),
        })
    }

    /// 跳转支付渠道手动退款
    pub async fn handle_refund<C: OperatorConsolePort>(
        &self,
        session: &RefundSession,
        console: &C,
    ) -> DomainResult<()> {
        session.ensure_enabled(RefundControl::Refund)?;
        if !self.confirm(console, keys::REFUND_CONFIRM).await {
            debug!("Refund declined for order: {}", session.order().order_id);
            return Ok(());
        }

        let _busy = session.begin(RefundControl::Refund)?;
        let order_id = session.order().order_id.as_str();
        info!("Requesting refund params for order: {}", order_id);

        let dispatched: DomainResult<()> = async {
            let params = self.order_actions.get_refund_params(order_id).await?;
            debug!("Received {} refund params for order: {}", params.len(), order_id);
            let form = ExternalForm::post(self.gateway_url.as_str(), params);
            console.open_external_form(form).await
        }
        .await;

        match dispatched {
            Ok(()) => {
                info!("Refund form dispatched for order: {}", order_id);
                session.set_awaiting_manual_confirmation(true);
                console.notify(Notification::info(self.translator.t(keys::REFUND_INFO)));
            }
            Err(e) => {
                error!("Refund form dispatch failed for order {}: {}", order_id, e);
                console.notify(Notification::error(e.to_string()));
            }
        }

        Ok(())
    }

    /// 代理退款
    pub async fn handle_proxy_refund<C: OperatorConsolePort>(
        &self,
        session: &RefundSession,
        console: &C,
    ) -> DomainResult<()> {
        session.ensure_enabled(RefundControl::ProxyRefund)?;
        if !self.confirm(console, keys::REFUND_PROXY_CONFIRM).await {
            debug!("Proxy refund declined for order: {}", session.order().order_id);
            return Ok(());
        }

        let _busy = session.begin(RefundControl::ProxyRefund)?;
        let order_id = session.order().order_id.as_str();
        info!("Requesting proxy refund for order: {}", order_id);

        match self.order_actions.proxy_refund(order_id).await {
            Ok(result) if result.processed => {
                info!("Proxy refund processed for order: {}", order_id);
                console.notify(Notification::success(self.translator.t(keys::REFUND_SUCCESS)));
            }
            Ok(_) => {
                warn!("Proxy refund not processed for order: {}", order_id);
                console.notify(Notification::info(
                    self.translator.t(keys::REFUND_PROXY_NOT_PROCESSED),
                ));
                session.set_awaiting_manual_confirmation(true);
            }
            Err(e) => {
                error!("Proxy refund failed for order {}: {}", order_id, e);
                console.notify(Notification::error(e.to_string()));
            }
        }

        Ok(())
    }

    /// 人工确认已退款
    pub async fn handle_mark_done<C: OperatorConsolePort>(
        &self,
        session: &RefundSession,
        console: &C,
    ) -> DomainResult<()> {
        session.ensure_enabled(RefundControl::MarkRefunded)?;
        if !self.confirm(console, keys::REFUND_VERIFY).await {
            debug!("Mark refunded declined for order: {}", session.order().order_id);
            return Ok(());
        }

        let _busy = session.begin(RefundControl::MarkRefunded)?;
        let order_id = session.order().order_id.as_str();
        info!("Marking order refunded: {}", order_id);

        match self.order_actions.mark_order_refunded(order_id).await {
            Ok(()) => {
                info!("Order marked refunded: {}", order_id);
                console.notify(Notification::success(self.translator.t(keys::REFUND_SUCCESS)));
                session.set_awaiting_manual_confirmation(false);
            }
            Err(e) => {
                error!("Mark refunded failed for order {}: {}", order_id, e);
                console.notify(Notification::error(e.to_string()));
            }
        }

        Ok(())
    }

    /// 查询支付渠道退款状态（只读，无需确认）
    pub async fn handle_verify<C: OperatorConsolePort>(
        &self,
        session: &RefundSession,
        console: &C,
    ) -> DomainResult<()> {
        let _busy = session.begin(RefundControl::Verify)?;
        let order_id = session.order().order_id.as_str();
        info!("Verifying refund status for order: {}", order_id);

        let result = match self.order_actions.verify_order_refund_status(order_id).await {
            Ok(result) => result,
            Err(e) => {
                error!("Refund status query failed for order {}: {}", order_id, e);
                console.notify(Notification::error(e.to_string()));
                return Ok(());
            }
        };

        if !result.success {
            let message = result
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| self.translator.t(keys::COMMON_ERROR));
            warn!("Refund status query unsuccessful for order {}: {}", order_id, message);
            console.notify(Notification::error(message));
            return Ok(());
        }

        match result.provider_status() {
            ProviderRefundStatus::Refunded => {
                console.notify(Notification::success(
                    self.translator.t(keys::VERIFY_SUCCESS_REFUNDED),
                ));
            }
            ProviderRefundStatus::StillPaid => {
                console.notify(Notification::info(self.translator.t(keys::VERIFY_INFO_PAID)));
                session.set_awaiting_manual_confirmation(true);
            }
            ProviderRefundStatus::Other(msg) => {
                debug!("Unrecognised provider status for order {}: {}", order_id, msg);
                console.notify(Notification::info(format!(
                    "{}: {}",
                    self.translator.t(keys::VERIFY_STATUS),
                    msg
                )));
            }
        }

        Ok(())
    }

    async fn confirm<C: OperatorConsolePort>(&self, console: &C, key: &str) -> bool {
        console.confirm(&self.translator.t(key)).await
    }
}
