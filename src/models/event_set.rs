use crate::errors::{AppError, AppResult};
use serde::Serialize;

pub const EVENT_COUNT: usize = 6;

/// The six event column names in canonical daily order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSet {
    names: [String; EVENT_COUNT],
}

impl EventSet {
    /// Build from configuration: exactly six unique, non-empty names.
    pub fn new(names: &[String]) -> AppResult<Self> {
        if names.len() != EVENT_COUNT {
            return Err(AppError::Config(format!(
                "expected exactly {EVENT_COUNT} events, found {}",
                names.len()
            )));
        }

        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(AppError::Config(format!("event #{} has an empty name", i + 1)));
            }
            if names[..i].iter().any(|n| n.trim() == name.trim()) {
                return Err(AppError::Config(format!("duplicate event name '{}'", name.trim())));
            }
        }

        let names: [String; EVENT_COUNT] = std::array::from_fn(|i| names[i].trim().to_string());
        Ok(Self { names })
    }

    pub fn names(&self) -> &[String; EVENT_COUNT] {
        &self.names
    }

    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// Canonical index of an event, matched case-insensitively.
    pub fn position(&self, name: &str) -> AppResult<usize> {
        self.names
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| AppError::UnknownEvent(name.to_string()))
    }
}
