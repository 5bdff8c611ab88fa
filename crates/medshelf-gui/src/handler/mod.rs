//! Message handler architecture.
//!
//! Handlers separate message handling logic from the main `App` struct.
//! Each handler implements [`MessageHandler`] for one message type and is
//! dispatched from `App::update`:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Draft(msg) => DraftHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod draft;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use draft::DraftHandler;

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Process a message, mutating state and optionally returning a task.
    fn handle(&self, state: &mut AppState, message: M) -> Task<Message>;
}
