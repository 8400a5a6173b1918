//! Event system: page events, user input, dispatch queue.

pub mod handler;
pub mod input;
pub mod message;

pub use handler::EventDispatcher;
pub use input::PageInput;
pub use message::{Event, EventKind};
