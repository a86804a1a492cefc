//! Provider Wiring
//!
//! The composition root. `ProviderRegistry` holds one first-writer-wins
//! slot per integration role; `init_app` evaluates each integration's
//! activation conditions and fills the surviving slots.

mod bootstrap;
mod registry;

pub use bootstrap::{AppContext, AppContextBuilder, init_app, init_test_app};
pub use registry::ProviderRegistry;
