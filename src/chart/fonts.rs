//! Bundled chart font.
//!
//! plotters draws glyphs through ab_glyph, which only knows fonts that were
//! registered by name. The charts only ask for "sans-serif" (also the default
//! family of mesh and legend labels), which maps to the bundled DejaVu Sans,
//! so output does not depend on the fonts installed on the machine. Bold and
//! italic requests fall back to the same face.

use crate::errors::{AppError, AppResult};
use plotters::style::{FontStyle, register_font};
use std::sync::OnceLock;
use tracing::debug;

static DEJAVU_SANS: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

static REGISTERED: OnceLock<bool> = OnceLock::new();

/// Register the bundled font once per process; later calls are free.
pub fn register_fonts() -> AppResult<()> {
    let ok = *REGISTERED.get_or_init(|| {
        let ok = register_font("sans-serif", FontStyle::Normal, DEJAVU_SANS).is_ok();
        debug!(ok, "bundled chart font registered");
        ok
    });

    if ok {
        Ok(())
    } else {
        Err(AppError::Render("bundled chart font could not be loaded".into()))
    }
}
