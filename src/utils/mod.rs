pub mod date;
pub mod path;
pub mod table;
pub mod time;

pub use time::{format_minutes, parse_minutes};
