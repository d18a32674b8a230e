pub mod direction;
pub mod record;
pub mod skipped;

pub use direction::{DirectionFlag, DirectionMode};
pub use record::Record;
pub use skipped::{SkipReason, SkippedLine};
