pub mod operator_console_port;
pub mod order_actions_port;
pub mod translator_port;

pub use operator_console_port::OperatorConsolePort;
pub use order_actions_port::{OrderActionsPort, ProxyRefundResult, VerifyResult};
pub use translator_port::TranslatorPort;
