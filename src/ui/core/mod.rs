//! Core UI functionality for taskdeck.
//!
//! This module contains the fundamental building blocks for the user interface:
//! event handling, action definitions, the component abstraction, shared
//! services and background operation management.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`context`] - Services shared by components and background operations
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background operations reporting back as actions
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and turn keys into actions
//! 2. **Actions** describe every state transition
//! 3. **Context** hands API clients, the session and the dialog coordinator around
//! 4. **Events** are processed through the [`EventHandler`]
//! 5. **Operations** run on the [`TaskManager`] and send their outcome back as an action

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, Reload};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{FinishedTask, Generation, TaskId, TaskManager};
