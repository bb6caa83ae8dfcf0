//! Top-level facade crate for slowbox.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use slowbox_core::*;
}

pub mod server {
    pub use slowbox_server::*;
}
