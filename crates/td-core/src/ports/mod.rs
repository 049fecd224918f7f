//! Port interfaces for the application layer.
//!
//! Ports define the contract between the navigation use cases and the
//! infrastructure implementations (session source, navigation runtime, HTTP
//! gateway). The core stays independent of any concrete runtime: the state
//! machine is pure, and everything imperative crosses one of these seams.

mod account_gateway;
mod navigation_events;
mod navigation_host;
mod session_source;

pub use account_gateway::{AccountGatewayPort, GatewayError};
pub use navigation_events::NavigationEventPort;
pub use navigation_host::NavigationHostPort;
pub use session_source::SessionSourcePort;
