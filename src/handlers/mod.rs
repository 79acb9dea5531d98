//! HTTP handler modules.
//! Used by: server.

pub mod health;
pub mod index;
pub mod metrics;
pub mod show;
