mod command;
mod query;

pub use self::command::{DynItemCommandRepository, ItemCommandRepositoryTrait};
pub use self::query::{DynItemQueryRepository, ItemQueryRepositoryTrait};
