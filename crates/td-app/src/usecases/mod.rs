//! Use cases.

pub mod navigation;
pub mod session;
