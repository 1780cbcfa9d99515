//! Adapters implementing the domain ports.

pub mod ids;
pub mod in_memory;
pub mod scheduler;
pub mod translation;
