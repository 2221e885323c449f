//! Stacked duration bars: one bar per day, seven segments from midnight to midnight.

use crate::chart::axis::{hour_axis, hours_label, month_axis, month_label};
use crate::chart::{Chart, render_err, rgb};
use crate::errors::{AppError, AppResult};
use crate::models::{DurationRecord, Segment, SegmentPalette};
use chrono::NaiveDate;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

/// Width of the legend column to the right of the bars.
pub const LEGEND_WIDTH: u32 = 240;

pub struct StackedChart<'a> {
    title: String,
    durations: &'a [DurationRecord],
    palette: &'a SegmentPalette,
    first: NaiveDate,
    last: NaiveDate,
}

impl<'a> StackedChart<'a> {
    pub fn new(
        title: impl Into<String>,
        durations: &'a [DurationRecord],
        palette: &'a SegmentPalette,
    ) -> AppResult<Self> {
        let first = durations.iter().map(|d| d.date).min();
        let last = durations.iter().map(|d| d.date).max();
        let (Some(first), Some(last)) = (first, last) else {
            return Err(AppError::EmptyDataset);
        };

        Ok(Self {
            title: title.into(),
            durations,
            palette,
            first,
            last,
        })
    }
}

impl Chart for StackedChart<'_> {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> AppResult<()> {
        root.fill(&WHITE).map_err(render_err)?;

        let (width, _) = root.dim_in_pixel();
        let plot_width = width.saturating_sub(LEGEND_WIDTH) as i32;
        let (plot_area, legend_area) = root.split_horizontally(plot_width);

        let first = self.first;

        let mut chart = ChartBuilder::on(&plot_area)
            .caption(&self.title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(month_axis(first, self.last), hour_axis(0, 24, 2))
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_label_formatter(&|x: &f64| month_label(first, *x))
            .y_label_formatter(&|y: &f64| hours_label(*y))
            .x_desc("Date")
            .y_desc("Time of Day")
            .label_style(FontDesc::new(FontFamily::SansSerif, 14.0, FontStyle::Normal))
            .draw()
            .map_err(render_err)?;

        for segment in Segment::ALL {
            let color = rgb(self.palette.get(segment).rgb());
            let i = segment.index();

            chart
                .draw_series(self.durations.iter().map(|d| {
                    let x = (d.date - first).num_days() as f64;
                    let below: i64 = d.spans[..i].iter().sum();
                    let y0 = below as f64 / 60.0;
                    let y1 = y0 + d.spans[i] as f64 / 60.0;
                    Rectangle::new([(x, y0), (x + 1.0, y1)], color.filled())
                }))
                .map_err(render_err)?;
        }

        draw_legend(&legend_area, self.palette)?;
        Ok(())
    }
}

/// Fixed legend in its own column so it never covers the bars.
fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    palette: &SegmentPalette,
) -> AppResult<()> {
    let font = FontDesc::new(FontFamily::SansSerif, 16.0, FontStyle::Normal);

    for (i, style) in palette.iter().enumerate() {
        let y = 70 + i as i32 * 30;
        let color = rgb(style.rgb());

        area.draw(&Rectangle::new([(10, y), (30, y + 20)], color.filled()))
            .map_err(render_err)?;
        area.draw(&Text::new(style.label.clone(), (40, y + 2), font.clone()))
            .map_err(render_err)?;
    }

    Ok(())
}
