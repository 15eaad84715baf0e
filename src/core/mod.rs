pub mod class_fact;
pub mod component;
pub mod errors;
pub mod module_source;

pub use class_fact::ClassFact;
pub use component::{Component, ComponentId, DependentClasses};
pub use errors::{Error, Result, ResultExt};
pub use module_source::ModuleSource;
