//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core calls and render results;
//! generation logic stays in `stubble-core`.

pub mod completions;
pub mod list;
pub mod make;
