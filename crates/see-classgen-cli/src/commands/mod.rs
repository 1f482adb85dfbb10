//! CLI command implementations for see-classgen.
//!
//! Each module corresponds to a subcommand (`see-classgen <command>`).

pub mod names;
pub mod new;
