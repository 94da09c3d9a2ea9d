//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod budgets;
pub mod categories;
pub mod chat;
pub mod goals;
pub mod health;
pub mod summary;
pub mod transactions;

// Re-export all handlers for use in router
pub use budgets::*;
pub use categories::*;
pub use chat::*;
pub use goals::*;
pub use health::*;
pub use summary::*;
pub use transactions::*;
