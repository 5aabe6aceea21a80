//! Game server boundary
//!
//! - `authority` - The [`GameAuthority`] trait every server binding implements
//! - `local` - In-process authority for offline play and tests
//! - `poller` - Background tasks publishing snapshots and the AI-turn flag

pub mod authority;
pub mod local;
pub mod poller;

pub use authority::GameAuthority;
pub use local::LocalAuthority;
pub use poller::{spawn_ai_flag_poller, spawn_snapshot_poller};
