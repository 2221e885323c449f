//! Duration segments and their fixed presentation.
//!
//! A segment is identified by its position in the day, never by the data it
//! holds: segment 0 always runs from midnight to the first event, segment 6
//! from the last event to the following midnight. The palette binds every
//! identity to one label and one color so charts stay readable across runs.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const SEGMENT_COUNT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    MidnightToFirst,
    FirstToSecond,
    SecondToThird,
    ThirdToFourth,
    FourthToFifth,
    FifthToSixth,
    SixthToMidnight,
}

impl Segment {
    pub const ALL: [Segment; SEGMENT_COUNT] = [
        Segment::MidnightToFirst,
        Segment::FirstToSecond,
        Segment::SecondToThird,
        Segment::ThirdToFourth,
        Segment::FourthToFifth,
        Segment::FifthToSixth,
        Segment::SixthToMidnight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Segment::MidnightToFirst => "midnight_to_first",
            Segment::FirstToSecond => "first_to_second",
            Segment::SecondToThird => "second_to_third",
            Segment::ThirdToFourth => "third_to_fourth",
            Segment::FourthToFifth => "fourth_to_fifth",
            Segment::FifthToSixth => "fifth_to_sixth",
            Segment::SixthToMidnight => "sixth_to_midnight",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentStyle {
    pub segment: Segment,
    pub label: String,
    pub color: String, // "#RRGGBB"
}

impl SegmentStyle {
    fn new(segment: Segment, label: &str, color: &str) -> Self {
        Self {
            segment,
            label: label.to_string(),
            color: color.to_string(),
        }
    }

    /// Color components, validated when the palette is built.
    pub fn rgb(&self) -> (u8, u8, u8) {
        parse_hex_color(&self.color).unwrap_or((0, 0, 0))
    }
}

/// Default entries, in canonical order.
pub fn default_styles() -> Vec<SegmentStyle> {
    vec![
        SegmentStyle::new(Segment::MidnightToFirst, "Midnight - Fajr", "#1B2A49"),
        SegmentStyle::new(Segment::FirstToSecond, "Fajr - Shuruq", "#4A6FA5"),
        SegmentStyle::new(Segment::SecondToThird, "Shuruq - Zuhr", "#F2C14E"),
        SegmentStyle::new(Segment::ThirdToFourth, "Zuhr - Assr", "#F78154"),
        SegmentStyle::new(Segment::FourthToFifth, "Assr - Maghrib", "#D1495B"),
        SegmentStyle::new(Segment::FifthToSixth, "Maghrib - Ishaa", "#5D2E8C"),
        SegmentStyle::new(Segment::SixthToMidnight, "Ishaa - Midnight", "#14213D"),
    ]
}

/// Ordered mapping segment → {label, color}, one entry per segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPalette {
    entries: [SegmentStyle; SEGMENT_COUNT],
}

impl SegmentPalette {
    /// Validate configured styles: exactly seven, every segment once, valid colors.
    ///
    /// Entries may appear in any order in the configuration; the palette is
    /// always stored in canonical order.
    pub fn new(styles: &[SegmentStyle]) -> AppResult<Self> {
        if styles.len() != SEGMENT_COUNT {
            return Err(AppError::Config(format!(
                "expected exactly {SEGMENT_COUNT} segment styles, found {}",
                styles.len()
            )));
        }

        let mut slots: [Option<SegmentStyle>; SEGMENT_COUNT] = Default::default();

        for style in styles {
            let slot = &mut slots[style.segment.index()];
            if slot.is_some() {
                return Err(AppError::Config(format!(
                    "segment '{}' is styled more than once",
                    style.segment.as_str()
                )));
            }
            if parse_hex_color(&style.color).is_none() {
                return Err(AppError::Config(format!(
                    "segment '{}' has invalid color '{}' (expected #RRGGBB)",
                    style.segment.as_str(),
                    style.color
                )));
            }
            *slot = Some(style.clone());
        }

        let mut ordered = Vec::with_capacity(SEGMENT_COUNT);
        for (segment, slot) in Segment::ALL.iter().zip(slots) {
            let style = slot.ok_or_else(|| {
                AppError::Config(format!("segment '{}' has no style", segment.as_str()))
            })?;
            ordered.push(style);
        }

        let entries: [SegmentStyle; SEGMENT_COUNT] = ordered
            .try_into()
            .map_err(|_| AppError::Config("segment palette is incomplete".into()))?;
        Ok(Self { entries })
    }

    pub fn get(&self, segment: Segment) -> &SegmentStyle {
        &self.entries[segment.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &SegmentStyle> {
        self.entries.iter()
    }
}

impl Default for SegmentPalette {
    fn default() -> Self {
        let styles = default_styles();
        Self {
            entries: std::array::from_fn(|i| styles[i].clone()),
        }
    }
}

pub fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
