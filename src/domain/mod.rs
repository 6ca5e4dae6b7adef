//! Domain layer: entities, store traits, and collaborator traits.

pub mod collaborators;
pub mod entities;
pub mod repositories;
pub mod task_event;
pub mod task_worker;

pub use task_event::AutomationTask;
