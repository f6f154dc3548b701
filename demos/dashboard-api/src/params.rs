//! Query-string form of the dashboard controls.
//!
//! List parameters are comma-separated. An absent parameter falls back to the
//! initial selection; a present but empty one selects nothing.

use fx_dashboard::config::DEFAULT_PAGE_SIZE;
use fx_dashboard::models::{Sort, SortOrder};
use fx_dashboard::{DashboardError, Quarter, Result, Selection, TableRequest, ViewState};
use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ViewParams {
    pub years: Option<String>,
    pub quarters: Option<String>,
    pub banks: Option<String>,
    pub window: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl ViewParams {
    pub fn view_state(&self, initial: &Selection) -> Result<ViewState> {
        let mut selection = initial.clone();
        if let Some(years) = &self.years {
            selection.years = split(years)
                .map(|y| {
                    y.parse::<i32>()
                        .map_err(|_| DashboardError::InvalidArgument(format!("invalid year: {y}")))
                })
                .collect::<Result<_>>()?;
        }
        if let Some(quarters) = &self.quarters {
            selection.quarters = split(quarters)
                .map(str::parse::<Quarter>)
                .collect::<Result<_>>()?;
        }
        if let Some(banks) = &self.banks {
            selection.banks = split(banks).map(String::from).collect();
        }

        let window = match &self.window {
            Some(w) => w.parse()?,
            None => Default::default(),
        };

        let sort = match &self.sort {
            Some(column) => Some(Sort {
                column: column.parse()?,
                order: match &self.order {
                    Some(order) => order.parse()?,
                    None => SortOrder::default(),
                },
            }),
            None => None,
        };

        Ok(ViewState {
            selection,
            window,
            table: TableRequest {
                sort,
                page: self.page.unwrap_or(0),
                page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            },
        })
    }
}

fn split(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fx_dashboard::models::SortColumn;
    use fx_dashboard::Window;

    fn initial() -> Selection {
        Selection::new([2021, 2022], Quarter::ALL, ["BB", "ITAU"])
    }

    #[test]
    fn absent_params_keep_initial_selection() {
        let state = ViewParams::default().view_state(&initial()).unwrap();
        assert_eq!(state.selection, initial());
        assert_eq!(state.window, Window::Quarterly);
        assert_eq!(state.table, TableRequest::default());
    }

    #[test]
    fn empty_param_selects_nothing() {
        let params = ViewParams {
            banks: Some(String::new()),
            ..Default::default()
        };
        let state = params.view_state(&initial()).unwrap();
        assert!(state.selection.banks.is_empty());
        assert_eq!(state.selection.years, initial().years);
    }

    #[test]
    fn lists_are_comma_separated() {
        let params = ViewParams {
            years: Some("2020, 2023".into()),
            quarters: Some("03,Q2,9".into()),
            banks: Some("SAFRA,BTG PACTUAL".into()),
            ..Default::default()
        };
        let state = params.view_state(&initial()).unwrap();
        assert_eq!(state.selection.years.into_iter().collect::<Vec<_>>(), vec![2020, 2023]);
        assert_eq!(
            state.selection.quarters.into_iter().collect::<Vec<_>>(),
            vec![Quarter::Q1, Quarter::Q2, Quarter::Q3]
        );
        assert!(state.selection.banks.contains("BTG PACTUAL"));
    }

    #[test]
    fn quarter_codes_without_leading_zero_are_month_ends() {
        let params = ViewParams {
            quarters: Some("3,12".into()),
            ..Default::default()
        };
        let state = params.view_state(&initial()).unwrap();
        assert_eq!(
            state.selection.quarters.into_iter().collect::<Vec<_>>(),
            vec![Quarter::Q1, Quarter::Q4]
        );
    }

    #[test]
    fn sort_defaults_to_ascending() {
        let params = ViewParams {
            sort: Some("spread".into()),
            page: Some(2),
            page_size: Some(25),
            ..Default::default()
        };
        let table = params.view_state(&initial()).unwrap().table;
        assert_eq!(
            table.sort,
            Some(Sort {
                column: SortColumn::Spread,
                order: SortOrder::Asc
            })
        );
        assert_eq!((table.page, table.page_size), (2, 25));
    }

    #[test]
    fn bad_values_are_invalid_arguments() {
        for params in [
            ViewParams {
                years: Some("twenty".into()),
                ..Default::default()
            },
            ViewParams {
                quarters: Some("5".into()),
                ..Default::default()
            },
            ViewParams {
                window: Some("monthly".into()),
                ..Default::default()
            },
            ViewParams {
                sort: Some("color".into()),
                ..Default::default()
            },
        ] {
            let err = params.view_state(&initial()).unwrap_err();
            assert!(matches!(err, DashboardError::InvalidArgument(_)));
        }
    }
}
