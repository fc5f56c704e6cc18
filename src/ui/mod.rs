//! Terminal user interface
//!
//! Screens are [`core::Component`]s owned by the [`app_component::AppComponent`],
//! which maps [`routes::Route`]s to screens and runs service calls in the
//! background.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;
pub mod routes;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::{run_app, RunOptions};
pub use routes::Route;
