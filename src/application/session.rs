use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::{Order, RefundControl, RefundWorkflowState};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// 会话默认空闲过期时间
pub const DEFAULT_SESSION_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

/// 退款会话：一个订单上挂载的退款控件实例
#[derive(Debug)]
pub struct RefundSession {
    id: Uuid,
    order: Order,
    state: Mutex<RefundWorkflowState>,
}

impl RefundSession {
    pub fn open(order: Order) -> Self {
        Self {
            id: Uuid::new_v4(),
            order,
            state: Mutex::new(RefundWorkflowState::default()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    /// 当前状态快照
    pub fn state(&self) -> RefundWorkflowState {
        *self.lock()
    }

    /// 检查控件可见且可用
    pub fn ensure_enabled(&self, control: RefundControl) -> DomainResult<()> {
        if !self.order.is_refundable() {
            return Err(DomainError::NotRefundable(self.order.order_id.clone()));
        }
        self.lock().check(control)
    }

    /// 原子地检查控件并置为处理中；返回的guard在drop时清除busy
    pub fn begin(&self, control: RefundControl) -> DomainResult<BusyGuard<'_>> {
        if !self.order.is_refundable() {
            return Err(DomainError::NotRefundable(self.order.order_id.clone()));
        }

        let mut state = self.lock();
        state.check(control)?;
        state.busy = true;
        debug!("Session {} busy with {}", self.id, control);

        Ok(BusyGuard { session: self })
    }

    pub fn set_awaiting_manual_confirmation(&self, awaiting: bool) {
        self.lock().awaiting_manual_confirmation = awaiting;
    }

    fn lock(&self) -> MutexGuard<'_, RefundWorkflowState> {
        // 状态只有两个布尔值，中毒后的数据依然有效
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// 处理中标记，离开作用域时复位
pub struct BusyGuard<'a> {
    session: &'a RefundSession,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.session.lock().busy = false;
        debug!("Session {} idle", self.session.id);
    }
}

#[derive(Debug)]
struct SessionEntry {
    session: Arc<RefundSession>,
    last_touched: Instant,
}

/// 会话注册表
///
/// 前端卸载控件时不一定会调用close（关标签页、断网），所以每次open/get时
/// 顺带清理空闲超过`idle_ttl`的会话。处理中的会话不会被清理。
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<Uuid, SessionEntry>>,
    idle_ttl: Duration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_idle_ttl(DEFAULT_SESSION_IDLE_TTL)
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_ttl,
        }
    }

    pub fn open(&self, order: Order) -> Arc<RefundSession> {
        let session = Arc::new(RefundSession::open(order));
        let now = Instant::now();

        let mut sessions = self.lock();
        self.sweep(&mut sessions, now);
        sessions.insert(
            session.id(),
            SessionEntry {
                session: session.clone(),
                last_touched: now,
            },
        );
        session
    }

    pub fn get(&self, id: Uuid) -> DomainResult<Arc<RefundSession>> {
        let now = Instant::now();

        let mut sessions = self.lock();
        self.sweep(&mut sessions, now);
        let entry = sessions
            .get_mut(&id)
            .ok_or_else(|| DomainError::SessionNotFound(id.to_string()))?;
        entry.last_touched = now;
        Ok(entry.session.clone())
    }

    pub fn close(&self, id: Uuid) -> DomainResult<()> {
        self.lock()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::SessionNotFound(id.to_string()))
    }

    fn sweep(&self, sessions: &mut HashMap<Uuid, SessionEntry>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, entry| {
            entry.session.state().busy || now.duration_since(entry.last_touched) < self.idle_ttl
        });

        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("Evicted {} idle refund sessions", evicted);
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, SessionEntry>> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
