//! Command implementations for orgsync-cli

pub mod check;
pub mod lint;
pub mod resolve;

pub use check::run_check;
pub use lint::run_lint;
pub use resolve::run_resolve;
