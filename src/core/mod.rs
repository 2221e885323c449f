pub mod durations;
pub mod loader;
pub mod normalize;
pub mod period;
pub mod pipeline;

pub use durations::{ValidationPolicy, derive, derive_batch, validate_batch};
pub use normalize::normalize_record;
pub use pipeline::Dataset;
