//! CLI command implementations

pub mod init;
pub mod scenarios;
pub mod show;

pub use init::init_command;
pub use scenarios::scenarios_command;
pub use show::show_command;
