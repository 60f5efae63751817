pub mod collection;
pub mod defaults;
pub mod snapshot;

pub use collection::{Collection, Record};
pub use defaults::default_snapshot;
pub use snapshot::{DuplicateId, StateSnapshot};
