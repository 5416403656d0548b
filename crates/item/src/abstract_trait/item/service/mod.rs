mod command;
mod query;

pub use self::command::{DynItemCommandService, ItemCommandServiceTrait};
pub use self::query::{DynItemQueryService, ItemQueryServiceTrait};
