//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. List methods clamp
//! user-supplied pagination and return `(items, total)`.

pub mod analytics_repo;
pub mod customer_repo;
pub mod interaction_repo;
pub mod sales_lead_repo;
pub mod support_ticket_repo;
pub mod worker_repo;

pub use analytics_repo::AnalyticsRepo;
pub use customer_repo::CustomerRepo;
pub use interaction_repo::InteractionRepo;
pub use sales_lead_repo::SalesLeadRepo;
pub use support_ticket_repo::SupportTicketRepo;
pub use worker_repo::WorkerRepo;
