//! ridgeway: least-cost routes across generated terrain.
//!
//! The binary generates a digital elevation model, prints it, and then shows
//! the cheapest corner-to-corner route found by each shortest-path engine
//! together with its energy cost.

pub mod config;
pub mod render;
pub mod report;

pub use config::RunConfig;
pub use render::Renderer;
pub use report::{report_routes, run};
