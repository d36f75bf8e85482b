//! Model-View-Intent (MVI) primitives.
//!
//! State changes flow one way:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ caller
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: self-contained snapshot handed to readers
//! - **Intent**: a request or an outcome (load started, item added)
//! - **Reducer**: pure function that produces the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
