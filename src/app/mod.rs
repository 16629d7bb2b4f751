pub mod context;
pub mod coordinator;
pub mod error;

pub use context::AppContext;
pub use coordinator::{CompletedPreview, Coordinator, PendingPreview, Screen};
pub use error::{HeadwaterError, Result};
