//! @ai:module:intent Benchmarked tools and their command builders
//! @ai:module:layer domain
//! @ai:module:public_api Tool, Invocation, CommandBuilder, Cracken, Maskprocessor, Crunch, default_tools

pub mod builders;
pub mod catalog;
pub mod command;

pub use builders::{translate_mask, Cracken, Crunch, Maskprocessor, CRUNCH_TOKENS};
pub use catalog::{default_tools, Tool};
pub use command::{CommandBuilder, Invocation};
