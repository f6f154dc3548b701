//! Per-bank time series for the line charts.

use chrono::NaiveDate;

use crate::config::RESULT_SCALE;
use crate::models::{Point, Record, Series};

pub struct SeriesQuery<'a> {
    rows: &'a [&'a Record],
}

impl<'a> SeriesQuery<'a> {
    pub fn new(rows: &'a [&'a Record]) -> Self {
        Self { rows }
    }

    /// One series per bank, banks in first-appearance order and points in
    /// period order. `point` maps a record to its `(y, text)` pair.
    pub fn by_bank<F>(&self, point: F) -> Vec<Series<NaiveDate>>
    where
        F: Fn(&Record) -> (Option<f64>, Option<f64>),
    {
        let mut series: Vec<Series<NaiveDate>> = Vec::new();
        for &record in self.rows {
            let (y, text) = point(record);
            let p = Point {
                x: record.period_key,
                y,
                text,
            };
            match series.iter_mut().find(|s| s.name == record.bank_name) {
                Some(s) => s.points.push(p),
                None => series.push(Series {
                    name: record.bank_name.clone(),
                    color: None,
                    points: vec![p],
                }),
            }
        }
        for s in &mut series {
            // stable, so equal periods keep source order
            s.points.sort_by_key(|p| p.x);
        }
        series
    }

    /// Operating result per bank; point text in millions.
    pub fn results(&self) -> Vec<Series<NaiveDate>> {
        self.by_bank(|r| (Some(r.total_result), Some(r.total_result / RESULT_SCALE)))
    }

    /// Spread per bank; periods without a defined spread become gaps.
    pub fn spreads(&self) -> Vec<Series<NaiveDate>> {
        self.by_bank(|r| (r.spread, r.spread))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Quarter, RawRecord};

    fn record(bank: &str, year: i32, quarter: Quarter, result: f64) -> Record {
        Record::from_raw(RawRecord {
            bank_name: bank.into(),
            year,
            quarter,
            primary_volume: 4_000_000.0,
            interbank_volume: 0.0,
            operation_result: result,
            operation_expense: 0.0,
            primary_count: 1,
            interbank_count: 1,
        })
        .unwrap()
    }

    #[test]
    fn groups_by_bank_and_orders_by_period() {
        let records = vec![
            record("ITAU", 2021, Quarter::Q1, 2_000_000.0),
            record("BB", 2020, Quarter::Q4, 1_000_000.0),
            record("ITAU", 2020, Quarter::Q2, 3_000_000.0),
        ];
        let rows: Vec<&Record> = records.iter().collect();
        let series = SeriesQuery::new(&rows).results();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "ITAU");
        assert_eq!(series[0].points.len(), 2);
        assert!(series[0].points[0].x < series[0].points[1].x);
        assert_eq!(series[0].points[0].text, Some(3.0));
        assert_eq!(series[1].name, "BB");
    }

    #[test]
    fn undefined_spread_is_a_gap() {
        let records = vec![
            record("BB", 2020, Quarter::Q1, 0.0),
            record("BB", 2020, Quarter::Q2, 10_000.0),
        ];
        let rows: Vec<&Record> = records.iter().collect();
        let series = SeriesQuery::new(&rows).spreads();
        assert_eq!(series[0].points[0].y, None);
        assert_eq!(series[0].points[1].y, Some(4.0));
    }
}
