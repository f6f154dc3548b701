//! Chart cosmetics shared by every figure: colors, titles, axis labels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{MARKET_LABEL, OTHER_LABEL};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Fixed colors per bank (and for the "Other" / "Market" labels). Banks
    /// not listed get `None` and are colored by the renderer.
    pub bank_colors: BTreeMap<String, String>,
    pub share_line_color: String,
    pub period_axis_title: String,
    pub result_title: String,
    pub spread_title: String,
    pub pie_title: String,
    pub count_axis_title: String,
    pub spread_axis_title: String,
    /// X axis title of the yearly comparison.
    pub year_axis_title: String,
    /// `{bank}` is replaced by the designated bank.
    pub comparison_title_template: String,
    /// `{bank}` is replaced by the designated bank.
    pub share_title_template: String,
    /// Secondary axis range of the share line, in percent.
    pub share_axis_range: [f64; 2],
}

impl Default for Theme {
    fn default() -> Self {
        let bank_colors = [
            ("BB", "#F9DD16"),
            ("ITAU", "#FF9641"),
            ("BRADESCO", "#633280"),
            ("SANTANDER", "#ec0000"),
            (OTHER_LABEL, "gray"),
            (MARKET_LABEL, "#005daa"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            bank_colors,
            share_line_color: "#a1b2da".to_string(),
            period_axis_title: "Year and Quarter".to_string(),
            result_title: "Operating Result".to_string(),
            spread_title: "FX Spread (%)".to_string(),
            pie_title: "Total Operations".to_string(),
            count_axis_title: "Number of Operations (thousands)".to_string(),
            spread_axis_title: "Spread".to_string(),
            year_axis_title: "Year".to_string(),
            comparison_title_template: "{bank} Operations Relative to Market".to_string(),
            share_title_template: "{bank} Share (%)".to_string(),
            share_axis_range: [0.0, 50.0],
        }
    }
}

impl Theme {
    pub fn color_for(&self, name: &str) -> Option<String> {
        self.bank_colors.get(name).cloned()
    }

    pub fn comparison_title(&self, designated: &str) -> String {
        self.comparison_title_template.replace(BANK_PLACEHOLDER, designated)
    }

    pub fn share_title(&self, designated: &str) -> String {
        self.share_title_template.replace(BANK_PLACEHOLDER, designated)
    }
}

const BANK_PLACEHOLDER: &str = "{bank}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_titles_name_the_designated_bank() {
        let theme = Theme::default();
        assert_eq!(
            theme.comparison_title("BB"),
            "BB Operations Relative to Market"
        );
        assert_eq!(theme.share_title("ITAU"), "ITAU Share (%)");
    }

    #[test]
    fn templates_are_configurable() {
        let theme = Theme {
            comparison_title_template: "Mercado vs {bank}".to_string(),
            share_title_template: "Participação {bank} (%)".to_string(),
            ..Theme::default()
        };
        assert_eq!(theme.comparison_title("BB"), "Mercado vs BB");
        assert_eq!(theme.share_title("BB"), "Participação BB (%)");
    }

    #[test]
    fn colors_are_looked_up_by_exact_name() {
        let theme = Theme::default();
        assert_eq!(theme.color_for("BB").as_deref(), Some("#F9DD16"));
        assert_eq!(theme.color_for("SAFRA"), None);
    }
}
