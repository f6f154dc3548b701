//! Figure construction: query output plus [`Theme`] cosmetics.

use crate::config::COUNT_SCALE;
use crate::error::Result;
use crate::models::{
    Axis, ComparisonChart, ComparisonKey, ComparisonTable, LineChart, Measure, PieChart,
    Point, Record, Series, TablePage, TableRequest, Window,
};
use crate::queries::{ComparisonQuery, PieQuery, SeriesQuery, TableQuery};
use crate::theme::Theme;

/// Builds every figure from one filtered slice of records.
pub struct Charts<'a> {
    rows: &'a [&'a Record],
    theme: &'a Theme,
}

impl<'a> Charts<'a> {
    pub fn new(rows: &'a [&'a Record], theme: &'a Theme) -> Self {
        Self { rows, theme }
    }

    pub fn result_line(&self) -> LineChart {
        LineChart {
            title: self.theme.result_title.clone(),
            x_axis: Axis::titled(&self.theme.period_axis_title),
            y_axis: Axis::titled(&self.theme.result_title),
            series: self.colored(SeriesQuery::new(self.rows).results()),
        }
    }

    pub fn spread_line(&self) -> LineChart {
        LineChart {
            title: self.theme.spread_title.clone(),
            x_axis: Axis::titled(&self.theme.period_axis_title),
            y_axis: Axis::titled(&self.theme.spread_axis_title),
            series: self.colored(SeriesQuery::new(self.rows).spreads()),
        }
    }

    pub fn pie(&self, threshold: f64) -> PieChart {
        let slices = PieQuery::new(self.rows).slices(threshold);
        PieChart {
            title: self.theme.pie_title.clone(),
            colors: slices.iter().map(|s| self.theme.color_for(&s.label)).collect(),
            labels: slices.iter().map(|s| s.label.clone()).collect(),
            values: slices.iter().map(|s| s.value).collect(),
            shares: slices.iter().map(|s| s.share).collect(),
        }
    }

    /// Grouped count bars (in thousands) for the designated bank and the
    /// market, with the designated share on the secondary axis.
    pub fn comparison(&self, designated: &str, window: Window) -> ComparisonChart {
        let table = ComparisonQuery::new(self.rows, designated).table(window, Measure::Count);
        self.comparison_from(&table)
    }

    pub fn comparison_from(&self, table: &ComparisonTable) -> ComparisonChart {
        let mut bars: Vec<Series<ComparisonKey>> = Vec::new();
        for row in &table.rows {
            let scaled = row.total_count as f64 / COUNT_SCALE;
            let point = Point {
                x: row.key,
                y: Some(scaled),
                text: Some(scaled),
            };
            match bars.iter_mut().find(|s| s.name == row.label) {
                Some(s) => s.points.push(point),
                None => bars.push(Series {
                    name: row.label.clone(),
                    color: self.theme.color_for(&row.label),
                    points: vec![point],
                }),
            }
        }

        let share_line = Series {
            name: self.theme.share_title(&table.designated),
            color: Some(self.theme.share_line_color.clone()),
            points: table
                .designated_rows()
                .map(|r| Point {
                    x: r.key,
                    y: r.share,
                    text: r.share,
                })
                .collect(),
        };

        ComparisonChart {
            title: self.theme.comparison_title(&table.designated),
            window: table.window,
            x_axis: Axis::titled(match table.window {
                Window::Quarterly => self.theme.period_axis_title.as_str(),
                Window::Yearly => self.theme.year_axis_title.as_str(),
            }),
            y_axis: Axis::titled(&self.theme.count_axis_title),
            y2_axis: Axis {
                title: self.theme.share_title(&table.designated),
                range: Some(self.theme.share_axis_range),
            },
            bars,
            share_line,
        }
    }

    pub fn table(&self, request: &TableRequest) -> Result<TablePage> {
        TableQuery::new(self.rows).page(request)
    }

    fn colored<X>(&self, mut series: Vec<Series<X>>) -> Vec<Series<X>> {
        for s in &mut series {
            s.color = self.theme.color_for(&s.name);
        }
        series
    }
}
