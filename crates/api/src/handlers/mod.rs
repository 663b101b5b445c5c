//! HTTP handlers, one module per resource.

pub mod analytics;
pub mod customers;
pub mod interactions;
pub mod sales_leads;
pub mod support_tickets;
pub mod workers;
