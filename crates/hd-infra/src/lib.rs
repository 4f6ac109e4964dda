//! # hd-infra
//!
//! Infrastructure adapters for Huddle's account settings flow: HTTP clients
//! for the hosted backend's auth, object storage, and row endpoints, plus a
//! channel-backed feedback adapter and a file-based image picker.

pub mod backend;
pub mod feedback;
pub mod picker;
