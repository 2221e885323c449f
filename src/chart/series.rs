//! Time series of one or more events: x = date, y = time of day.

use crate::chart::axis::{
    date_span, day_index, hour_axis, hours_label, month_axis, month_label,
};
use crate::chart::{Chart, render_err};
use crate::errors::{AppError, AppResult};
use crate::models::{EventSet, NormalizedRecord};
use chrono::NaiveDate;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

const SERIES_COLORS: [RGBColor; 6] = [
    RGBColor(200, 0, 100),
    RGBColor(30, 144, 255),
    RGBColor(34, 139, 34),
    RGBColor(255, 140, 0),
    RGBColor(128, 0, 128),
    RGBColor(90, 90, 90),
];

pub struct SeriesChart<'a> {
    title: String,
    records: &'a [NormalizedRecord],
    events: Vec<(usize, String)>, // (canonical index, display name)
    first: NaiveDate,
    last: NaiveDate,
}

impl<'a> SeriesChart<'a> {
    /// `selected` holds event names; they are resolved against `event_set`.
    pub fn new(
        records: &'a [NormalizedRecord],
        event_set: &EventSet,
        selected: &[String],
    ) -> AppResult<Self> {
        let (first, last) = date_span(records).ok_or(AppError::EmptyDataset)?;

        if selected.is_empty() {
            return Err(AppError::Render("no event selected for the time series".into()));
        }

        let mut events = Vec::with_capacity(selected.len());
        for name in selected {
            let idx = event_set.position(name)?;
            if !events.iter().any(|(i, _)| *i == idx) {
                events.push((idx, event_set.name(idx).to_string()));
            }
        }

        let names: Vec<&str> = events.iter().map(|(_, n)| n.as_str()).collect();
        let title = format!("{} Prayer Times", names.join(", "));

        Ok(Self {
            title,
            records,
            events,
            first,
            last,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// File-name fragment for the selected events, e.g. "Fajr-Ishaa".
    pub fn slug(&self) -> String {
        self.events
            .iter()
            .map(|(_, n)| n.replace(char::is_whitespace, "_"))
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Whole-hour y bounds around every plotted value.
    fn hour_bounds(&self) -> (u32, u32) {
        let values = self
            .records
            .iter()
            .flat_map(|r| self.events.iter().map(move |(i, _)| r.offsets[*i]));

        let (lo, hi) = values.fold((i64::MAX, i64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let lo = (lo / 60).max(0) as u32;
        let mut hi = ((hi + 59) / 60).min(24) as u32;
        if hi <= lo {
            hi = lo + 1;
        }
        (lo, hi)
    }
}

impl Chart for SeriesChart<'_> {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> AppResult<()> {
        root.fill(&WHITE).map_err(render_err)?;

        let first = self.first;
        let (lo, hi) = self.hour_bounds();

        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(month_axis(first, self.last), hour_axis(lo, hi, 1))
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

        for (n, (idx, name)) in self.events.iter().enumerate() {
            let style = SERIES_COLORS[n % SERIES_COLORS.len()].stroke_width(2);
            let mut points: Vec<(f64, f64)> = self
                .records
                .iter()
                .map(|r| (day_index(first, r.date()) + 0.5, r.hours(*idx)))
                .collect();
            points.sort_by(|a, b| a.0.total_cmp(&b.0));

            chart
                .draw_series(LineSeries::new(points, style).point_size(2))
                .map_err(render_err)?
                .label(name.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], style));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK.mix(0.3))
            .label_font(FontDesc::new(FontFamily::SansSerif, 16.0, FontStyle::Normal))
            .draw()
            .map_err(render_err)?;

        Ok(())
    }
}
