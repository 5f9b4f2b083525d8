//! Execution Engine
//!
//! CPU feature detection and kernel dispatch.

pub mod dispatcher;

pub use dispatcher::get_active_backend_name;
