//! Reusable UI components

pub mod common;
pub mod form;
pub mod scrollbar_helper;
pub mod status_bar;

// Screens
pub mod home_view;
pub mod login_view;
pub mod project_list;
pub mod register_view;
pub mod task_list;

// Chrome and overlays
pub mod logs_panel;
pub mod navbar;
pub mod popup_component;

pub use home_view::HomeView;
pub use login_view::LoginView;
pub use logs_panel::LogsPanel;
pub use navbar::Navbar;
pub use popup_component::PopupComponent;
pub use project_list::ProjectListView;
pub use register_view::RegisterView;
pub use status_bar::StatusBar;
pub use task_list::TaskListView;
