//! Entity models and DTOs, one module per table.

pub mod analytics;
pub mod customer;
pub mod interaction;
pub mod sales_lead;
pub mod support_ticket;
pub mod worker;
