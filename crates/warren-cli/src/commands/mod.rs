//! Command implementations for warren-cli

pub mod renovate;
pub mod version;
pub mod zoo;

pub use renovate::run_renovate;
pub use version::run_version;
pub use zoo::run_zoo;
