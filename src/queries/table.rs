//! Sorting and pagination for the data table.

use std::cmp::Ordering;

use crate::error::{DashboardError, Result};
use crate::models::{Record, SortColumn, SortOrder, TablePage, TableRequest};

pub struct TableQuery<'a> {
    rows: &'a [&'a Record],
}

impl<'a> TableQuery<'a> {
    pub fn new(rows: &'a [&'a Record]) -> Self {
        Self { rows }
    }

    /// Sort (stable, nulls last in either direction) and cut out one page.
    ///
    /// A page past the end is empty, not an error.
    pub fn page(&self, request: &TableRequest) -> Result<TablePage> {
        if request.page_size == 0 {
            return Err(DashboardError::InvalidArgument(
                "page_size must be at least 1".into(),
            ));
        }

        let mut sorted: Vec<&Record> = self.rows.to_vec();
        if let Some(sort) = request.sort {
            sorted.sort_by(|a, b| compare(a, b, sort.column, sort.order));
        }

        let total_rows = sorted.len();
        let page_count = total_rows.div_ceil(request.page_size);
        let rows = sorted
            .into_iter()
            .skip(request.page.saturating_mul(request.page_size))
            .take(request.page_size)
            .cloned()
            .collect();

        Ok(TablePage {
            rows,
            sort: request.sort,
            page: request.page,
            page_size: request.page_size,
            page_count,
            total_rows,
        })
    }
}

fn compare(a: &Record, b: &Record, column: SortColumn, order: SortOrder) -> Ordering {
    let directed = |ord: Ordering| match order {
        SortOrder::Asc => ord,
        SortOrder::Desc => ord.reverse(),
    };
    match column {
        SortColumn::BankName => directed(a.bank_name.cmp(&b.bank_name)),
        SortColumn::Year => directed(a.year.cmp(&b.year)),
        SortColumn::Quarter => directed(a.quarter.cmp(&b.quarter)),
        SortColumn::PeriodKey => directed(a.period_key.cmp(&b.period_key)),
        SortColumn::PrimaryVolume => directed(a.primary_volume.total_cmp(&b.primary_volume)),
        SortColumn::InterbankVolume => {
            directed(a.interbank_volume.total_cmp(&b.interbank_volume))
        }
        SortColumn::OperationResult => {
            directed(a.operation_result.total_cmp(&b.operation_result))
        }
        SortColumn::OperationExpense => {
            directed(a.operation_expense.total_cmp(&b.operation_expense))
        }
        SortColumn::PrimaryCount => directed(a.primary_count.cmp(&b.primary_count)),
        SortColumn::InterbankCount => directed(a.interbank_count.cmp(&b.interbank_count)),
        SortColumn::TotalVolume => directed(a.total_volume.total_cmp(&b.total_volume)),
        SortColumn::TotalResult => directed(a.total_result.total_cmp(&b.total_result)),
        SortColumn::TotalCount => directed(a.total_count.cmp(&b.total_count)),
        SortColumn::Spread => match (a.spread, b.spread) {
            (Some(x), Some(y)) => directed(x.total_cmp(&y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Quarter, RawRecord, Sort};

    fn record(bank: &str, count: i64, result: f64) -> Record {
        Record::from_raw(RawRecord {
            bank_name: bank.into(),
            year: 2020,
            quarter: Quarter::Q1,
            primary_volume: 100.0,
            interbank_volume: 0.0,
            operation_result: result,
            operation_expense: 0.0,
            primary_count: count,
            interbank_count: 0,
        })
        .unwrap()
    }

    fn records() -> Vec<Record> {
        vec![
            record("C", 3, 1.0),
            record("A", 1, 0.0),
            record("B", 2, 2.0),
            record("D", 2, -1.0),
        ]
    }

    #[test]
    fn unsorted_keeps_source_order_and_pages() {
        let records = records();
        let rows: Vec<&Record> = records.iter().collect();
        let page = TableQuery::new(&rows)
            .page(&TableRequest {
                sort: None,
                page: 1,
                page_size: 3,
            })
            .unwrap();
        assert_eq!(page.total_rows, 4);
        assert_eq!(page.page_count, 2);
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].bank_name, "D");
    }

    #[test]
    fn sorts_descending_and_stable() {
        let records = records();
        let rows: Vec<&Record> = records.iter().collect();
        let page = TableQuery::new(&rows)
            .page(&TableRequest {
                sort: Some(Sort {
                    column: SortColumn::TotalCount,
                    order: SortOrder::Desc,
                }),
                ..TableRequest::default()
            })
            .unwrap();
        let banks: Vec<&str> = page.rows.iter().map(|r| r.bank_name.as_str()).collect();
        assert_eq!(banks, vec!["C", "B", "D", "A"]);
    }

    #[test]
    fn null_spreads_sort_last_both_ways() {
        let records = records();
        let rows: Vec<&Record> = records.iter().collect();
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let page = TableQuery::new(&rows)
                .page(&TableRequest {
                    sort: Some(Sort {
                        column: SortColumn::Spread,
                        order,
                    }),
                    ..TableRequest::default()
                })
                .unwrap();
            assert!(page.rows[0].spread.is_some());
            assert!(page.rows[1].spread.is_some());
            assert!(page.rows[2].spread.is_none());
            assert!(page.rows[3].spread.is_none());
        }
    }

    #[test]
    fn page_past_end_is_empty() {
        let records = records();
        let rows: Vec<&Record> = records.iter().collect();
        let page = TableQuery::new(&rows)
            .page(&TableRequest {
                sort: None,
                page: 9,
                page_size: 10,
            })
            .unwrap();
        assert!(page.rows.is_empty());
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let rows: Vec<&Record> = Vec::new();
        let request = TableRequest {
            sort: None,
            page: 0,
            page_size: 0,
        };
        assert!(TableQuery::new(&rows).page(&request).is_err());
    }
}
