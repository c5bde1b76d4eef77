//! Admin Module
//!
//! HTTP surface of the admin dashboard. The operations themselves live with
//! their domains (`catalog::editor`, `reviews::board`).

pub mod handlers;

pub use handlers::routes;
