pub mod entities;
pub mod errors;
pub mod events;
pub mod value_objects;

pub use entities::{ExternalForm, Order, RefundParams, RefundWorkflowState};
pub use errors::DomainError;
pub use events::*;
pub use value_objects::{OrderStatus, ProviderRefundStatus, RefundControl, Severity};
