pub mod collator;
pub mod comparator;
pub mod config;
pub mod error;
pub mod models;
pub mod resolver;
pub mod sortable;

pub use collator::{Collator, JapaneseCollator};
pub use comparator::ComparatorFactory;
pub use config::{AppConfig, SortSettings};
pub use error::YomiError;
pub use resolver::{create_indexable_name, index_letter, SortFieldResolver};
pub use sortable::{Analyzable, Sortable, SortableKind};
