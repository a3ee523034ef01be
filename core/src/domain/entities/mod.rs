//! Domain entities representing core business objects.

pub mod activity;
pub mod lease;
pub mod maintenance;
pub mod payment;
pub mod property;
pub mod tenant;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use activity::ActivityLog;
pub use lease::Lease;
pub use maintenance::MaintenanceRequest;
pub use payment::Payment;
pub use property::{Property, PropertyUnit};
pub use tenant::Tenant;
pub use token::Claims;
pub use user::User;
