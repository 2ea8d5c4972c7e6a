//! Outbound integration points.
//!
//! SYSTEM CONTEXT
//! ==============
//! `sink` is where a submitted registration leaves the form. Today it only
//! logs; a backend call would replace the default handler without touching
//! the page.

pub mod sink;
