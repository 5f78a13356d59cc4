/// 文案键
pub mod keys {
    pub const REFUND_CONFIRM: &str = "admin.orders.refundConfirm";
    pub const REFUND_INFO: &str = "admin.orders.refundInfo";
    pub const REFUND_PROXY_CONFIRM: &str = "admin.orders.refundProxyConfirm";
    pub const REFUND_PROXY_NOT_PROCESSED: &str = "admin.orders.refundProxyNotProcessed";
    pub const REFUND_SUCCESS: &str = "admin.orders.refundSuccess";
    pub const REFUND_VERIFY: &str = "admin.orders.refundVerify";
    pub const VERIFY_SUCCESS_REFUNDED: &str = "admin.orders.verifySuccessRefunded";
    pub const VERIFY_INFO_PAID: &str = "admin.orders.verifyInfoPaid";
    pub const VERIFY_STATUS: &str = "admin.orders.verifyStatus";
    pub const CHECK_STATUS: &str = "admin.orders.checkStatus";
    pub const REFUND: &str = "admin.orders.refund";
    pub const REFUND_PROXY: &str = "admin.orders.refundProxy";
    pub const MARK_REFUNDED: &str = "admin.orders.markRefunded";
    pub const COMMON_ERROR: &str = "common.error";
}

/// 文案翻译端口
pub trait TranslatorPort: Send + Sync + 'static {
    fn t(&self, key: &str) -> String;
}
