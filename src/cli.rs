pub mod command;
pub mod run;

pub use run::{TextInterface, run_app};
