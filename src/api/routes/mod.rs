//! API Routes
//!
//! Route handlers organized by functionality.

pub mod actions;
pub mod health;
