//! Navigation domain module.
//!
//! The session-gated navigation controller core: the pure derivation from
//! session signals to a top-level navigation state, the edge-triggered
//! redirect guard, the router state machine that ties the two together, and
//! the closed route table.

mod decision;
mod guard;
mod route;
mod state;
mod state_machine;

pub use decision::decide;
pub use guard::EdgeGuard;
pub use route::{initial_route, MainTab, Route};
pub use state::NavigationState;
pub use state_machine::{RouterAction, RouterState, RouterStateMachine};
