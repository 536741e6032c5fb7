pub mod args;
pub mod preview;
