pub mod event_set;
pub mod record;
pub mod segment;

pub use event_set::{EVENT_COUNT, EventSet};
pub use record::{DailyRecord, DurationRecord, NormalizedRecord};
pub use segment::{SEGMENT_COUNT, Segment, SegmentPalette, SegmentStyle};
