//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its own state. The router shell in `app` mounts exactly one
//! page per path.

pub mod dashboard;
pub mod register;
