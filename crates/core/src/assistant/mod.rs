//! Assistant contract consumed by the session.
//!
//! The implementation lives in the `syscalc-assistant` crate.

mod assistant_traits;

pub use assistant_traits::{AssistantReply, AssistantTrait, ReplyCallback};
