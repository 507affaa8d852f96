pub mod identity;
pub mod notes;

pub use identity::{AuthPayload, IdentityService};
pub use notes::NoteService;
