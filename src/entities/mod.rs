pub mod message;
pub mod project;
pub mod session;
pub mod task;

pub use message::MessageResponse;
pub use project::{Project, ProjectRequest};
pub use session::Session;
pub use task::{Task, TaskRequest};
