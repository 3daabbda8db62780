pub mod args;
pub mod output;
pub mod table;

mod dispatch;

pub use args::Cli;
pub use dispatch::run_cli;
