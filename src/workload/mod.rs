//! @ai:module:intent Workload definitions and the builtin catalog
//! @ai:module:layer domain
//! @ai:module:public_api Workload, CharClass, MaskPosition, builtin_workloads

pub mod catalog;
pub mod mask;
pub mod task;

pub use catalog::builtin_workloads;
pub use mask::{parse_mask, CharClass, MaskPosition};
pub use task::Workload;
