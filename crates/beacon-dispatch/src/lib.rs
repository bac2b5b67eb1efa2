//! # beacon-dispatch
//!
//! The alert notification engine: scores alerts for urgency, resolves a
//! deduplicated recipient set from heterogeneous criteria, fans delivery
//! out across independent channels with partial-failure isolation, and
//! applies aggregate delivery counters back onto the alert.
//!
//! External collaborators (user store, SMS/email providers, alert store)
//! are capability traits in [`traits`]; the engine owns no transport or
//! persistence code.

pub mod coordinator;
pub mod engine;
pub mod format;
pub mod gate;
pub mod resolver;
pub mod stats;
pub mod traits;

pub use coordinator::DispatchCoordinator;
pub use engine::NotificationEngine;
pub use gate::ChannelGate;
pub use resolver::{RecipientResolver, ResolveOptions};
pub use stats::StatsUpdater;
pub use traits::{AlertStore, EmailProvider, EmailReceipt, SmsProvider, SmsReceipt, UserStore};
