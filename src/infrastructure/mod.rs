//! Infrastructure layer: stores and external collaborator implementations.

pub mod external;
pub mod memory;
