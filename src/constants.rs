//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Remote service
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8081";
pub const API_URL_ENV: &str = "TASKDECK_API_URL";

/// Name of the single persisted slot holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "auth-user";

// Dialog button labels
pub const DIALOG_CONFIRM_LABEL: &str = "Confirm";
pub const DIALOG_CANCEL_LABEL: &str = "Cancel";
pub const DIALOG_OK_LABEL: &str = "OK";

// Confirmation prompts
pub const CONFIRM_DELETE_PROJECT_TITLE: &str = "Delete project";
pub const CONFIRM_DELETE_PROJECT_MESSAGE: &str = "Delete this project and all of its tasks?";
pub const CONFIRM_DELETE_TASK_TITLE: &str = "Delete task";
pub const CONFIRM_DELETE_TASK_MESSAGE: &str = "Do you want to delete this task?";

// Success Messages
pub const SUCCESS_PROJECT_CREATED: &str = "✅ Project created";
pub const SUCCESS_PROJECT_UPDATED: &str = "✅ Project updated";
pub const SUCCESS_PROJECT_DELETED: &str = "✅ Project deleted";
pub const SUCCESS_TASK_CREATED: &str = "✅ Task created";
pub const SUCCESS_TASK_UPDATED: &str = "✅ Task updated";
pub const SUCCESS_TASK_TOGGLED: &str = "✅ Task status updated";
pub const SUCCESS_TASK_DELETED: &str = "✅ Task deleted";
pub const SUCCESS_SIGNED_OUT: &str = "✅ Signed out";
pub const SUCCESS_REGISTERED: &str = "Account created, please sign in";

// Error Messages
pub const ERROR_LOGIN_FAILED: &str = "Login failed";
pub const ERROR_REGISTRATION_FAILED: &str = "Error during registration";
pub const ERROR_LOAD_PROJECTS_FAILED: &str = "Could not load projects";
pub const ERROR_LOAD_TASKS_FAILED: &str = "Could not load tasks";
pub const ERROR_PROJECT_CREATE_FAILED: &str = "❌ Failed to create project";
pub const ERROR_PROJECT_UPDATE_FAILED: &str = "❌ Failed to update project";
pub const ERROR_PROJECT_DELETE_FAILED: &str = "❌ Failed to delete project";
pub const ERROR_TASK_CREATE_FAILED: &str = "❌ Failed to create task";
pub const ERROR_TASK_UPDATE_FAILED: &str = "❌ Failed to update task";
pub const ERROR_TASK_TOGGLE_FAILED: &str = "❌ Failed to update task status";
pub const ERROR_TASK_DELETE_FAILED: &str = "❌ Failed to delete task";
pub const ERROR_SIGN_OUT_FAILED: &str = "❌ Failed to sign out";
pub const ERROR_SAVE_SESSION_FAILED: &str = "Could not save the session";

// Validation Error Messages
pub const ERROR_TITLE_REQUIRED: &str = "Title is required";
pub const ERROR_DESCRIPTION_REQUIRED: &str = "Description is required";
pub const ERROR_CREDENTIALS_REQUIRED: &str = "Email and password are required";
pub const ERROR_REGISTRATION_FIELDS_REQUIRED: &str = "Name, email and password are required";
pub const ERROR_INVALID_DUE_DATE: &str = "Due date must look like YYYY-MM-DD";

// UI Messages
pub const DIALOG_TITLE_ERROR: &str = "Error";
pub const DIALOG_TITLE_REGISTERED: &str = "Registration complete";
pub const STATUS_DELETE_CANCELLED: &str = "Deletion cancelled";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const LOADING: &str = "Loading...";

/// Date format accepted for task due dates.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";
