pub mod command;
pub mod sequencetree;

pub use command::{Command, CommandError};
pub use sequencetree::SequenceTree;
