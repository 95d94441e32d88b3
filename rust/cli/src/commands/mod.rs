//! Command handler modules for the showdown CLI.
//!
//! Each subcommand lives in its own file and exposes one handler:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and, for `play`, the input stream are
//!   passed in so tests can drive them with in-memory buffers
//! - Errors propagate as [`CliError`](crate::error::CliError)

mod cfg;
mod deal;
mod eval;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
