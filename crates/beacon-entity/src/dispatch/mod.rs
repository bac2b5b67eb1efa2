//! Dispatch value objects: channels, per-channel accounting, and the
//! deduplicated recipient set.

pub mod channel;
pub mod recipient;
pub mod result;

pub use channel::Channel;
pub use recipient::RecipientSet;
pub use result::{ChannelReport, DispatchResult, SendFailure};
