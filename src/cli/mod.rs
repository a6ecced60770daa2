pub mod args;
pub mod dispatcher;
pub mod normalization;

pub use args::{Cli, GlobalFlags};
