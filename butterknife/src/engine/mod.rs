//! Execution Engine
//!
//! CPU dispatch for the evaluation kernels.

pub mod dispatcher;

pub use dispatcher::get_active_backend_name;
