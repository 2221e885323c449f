//! Chart rendering on top of plotters.
//!
//! Both chart kinds draw into a staging file next to the target and are only
//! renamed into place once the backend has presented the whole figure. The
//! staging file is removed on any other exit, a panic in the backend included,
//! so no partial chart is left behind.

pub mod axis;
pub mod display;
pub mod fonts;
pub mod series;
pub mod stacked;

pub use series::SeriesChart;
pub use stacked::StackedChart;

use crate::chart::fonts::register_fonts;
use crate::errors::{AppError, AppResult};
use crate::utils::path::staging_file;
use clap::ValueEnum;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Smallest canvas that leaves the stacked chart a usable plot next to its legend.
pub const MIN_WIDTH: u32 = stacked::LEGEND_WIDTH + 320;
pub const MIN_HEIGHT: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ChartFormat {
    #[default]
    Png,
    Svg,
}

impl ChartFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
        }
    }
}

/// Something that can draw itself on any plotters backend.
pub trait Chart {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> AppResult<()>;
}

pub(crate) fn render_err<E: Display>(e: E) -> AppError {
    AppError::Render(e.to_string())
}

pub(crate) fn rgb((r, g, b): (u8, u8, u8)) -> RGBColor {
    RGBColor(r, g, b)
}

pub fn check_size((width, height): (u32, u32)) -> AppResult<()> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(AppError::Render(format!(
            "chart size {width}x{height} is too small, need at least {MIN_WIDTH}x{MIN_HEIGHT}"
        )));
    }
    Ok(())
}

/// Removes the staging file when dropped, unless it was moved into place.
struct Staging {
    path: PathBuf,
    armed: bool,
}

impl Staging {
    fn new(path: PathBuf) -> Self {
        Self { path, armed: true }
    }

    fn commit(mut self, target: &Path) -> AppResult<()> {
        fs::rename(&self.path, target)?;
        self.armed = false;
        Ok(())
    }
}

impl Drop for Staging {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Render `chart` to `target`; the file exists only if rendering succeeded.
pub fn render_to_file<C: Chart>(
    chart: &C,
    target: &Path,
    format: ChartFormat,
    size: (u32, u32),
) -> AppResult<()> {
    check_size(size)?;
    register_fonts()?;

    // declared before the backend so it is dropped after it, even on unwind
    let staging = Staging::new(staging_file(target));
    debug!(target = %target.display(), staging = %staging.path.display(), "rendering chart");

    match format {
        ChartFormat::Png => {
            let root = BitMapBackend::new(&staging.path, size).into_drawing_area();
            chart.draw(&root)?;
            root.present().map_err(render_err)?;
        }
        ChartFormat::Svg => {
            let root = SVGBackend::new(&staging.path, size).into_drawing_area();
            chart.draw(&root)?;
            root.present().map_err(render_err)?;
        }
    }

    staging.commit(target)
}

/// Render `chart` into an RGB pixel buffer (3 bytes per pixel, row-major).
pub fn render_to_buffer<C: Chart>(chart: &C, size: (u32, u32)) -> AppResult<Vec<u8>> {
    check_size(size)?;
    register_fonts()?;

    let mut buffer = vec![0u8; size.0 as usize * size.1 as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
        chart.draw(&root)?;
        root.present().map_err(render_err)?;
    }
    Ok(buffer)
}
