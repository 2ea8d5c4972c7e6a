//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State here is screen-local. Each page creates its own signals from these
//! plain models; nothing is shared across routes.

pub mod draft;
