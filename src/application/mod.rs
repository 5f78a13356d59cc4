pub mod dto;
pub mod refund_workflow;
pub mod session;

#[cfg(test)]
pub mod testing;

pub use dto::{ConsoleActionRequest, ConsoleResponse, ErrorResponse, SessionResponse};
pub use refund_workflow::RefundWorkflowService;
pub use session::SessionRegistry;
