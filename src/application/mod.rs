//! Application layer orchestrating the domain.
//!
//! `DemoWizard` drives a wizard session on an injected scheduler, `demos`
//! holds the preset wizards of the product pages and `DashboardService`
//! aggregates a trader's history.

pub mod dashboard;
pub mod demos;
pub mod wizard;
