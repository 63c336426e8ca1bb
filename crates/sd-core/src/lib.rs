pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::account_status::AccountStatus;
pub use models::audit_action::AuditAction;
pub use models::audit_entry::AuditEntry;
pub use models::correlation_risk::CorrelationRisk;
pub use models::criterion_check::CriterionCheck;
pub use models::identity::Identity;
pub use models::portfolio::Portfolio;
pub use models::portfolio_position::PortfolioPosition;
pub use models::queued_task::QueuedTask;
pub use models::role::Role;
pub use models::strategy::Strategy;
pub use models::strategy_status::StrategyStatus;
pub use models::task_status::TaskStatus;
pub use models::threshold::Threshold;
pub use models::view_descriptor::ViewDescriptor;

#[cfg(test)]
mod tests;
