//! taskdeck - a terminal client for a project/task REST service
//!
//! Users sign in, browse their projects and manage each project's tasks.
//! Confirmations and notices go through a dialog coordinator that any part
//! of the application can await without knowing how the dialog is drawn.
//!
//! # Modules
//!
//! * [`api`] - HTTP clients for the auth, project and task endpoints
//! * [`config`] - Application configuration management
//! * [`dialog`] - Dialog coordinator and the host that renders its requests
//! * [`entities`] - Wire records exchanged with the service
//! * [`session`] - Persisted login session
//! * [`ui`] - Terminal user interface components

/// HTTP clients for the remote service
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Request/response coordination for modal dialogs
pub mod dialog;

/// Records exchanged with the remote service
pub mod entities;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Session storage shared by the API clients and the UI
pub mod session;

/// Terminal user interface components and rendering
pub mod ui;

pub use entities::{MessageResponse, Project, ProjectRequest, Session, Task, TaskRequest};
