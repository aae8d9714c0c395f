use serde::{Deserialize, Serialize};

use crate::domain::chart::{DomainPadding, Easing, PointStyle, ScaleBuilder};
use crate::domain::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self { top: 20.0, right: 40.0, bottom: 120.0, left: 100.0 }
    }
}

/// Where the overlay sits relative to the top-centre of the hovered point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipOffset {
    pub top: f64,
    pub left: f64,
}

impl Default for TooltipOffset {
    fn default() -> Self {
        Self { top: 80.0, left: -60.0 }
    }
}

/// Chart configuration. Every field has a default, so partial JSON works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub svg_width: f64,
    pub svg_height: f64,
    pub margin: Margins,
    pub domain_padding: DomainPadding,
    pub transition_ms: f64,
    pub easing: Easing,
    pub point_style: PointStyle,
    pub tick_count: usize,
    pub year_floor: f64,
    pub y_axis_title: String,
    pub tooltip_offset: TooltipOffset,
    pub data_url: String,
    pub container_selector: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            svg_width: 960.0,
            svg_height: 600.0,
            margin: Margins::default(),
            domain_padding: DomainPadding::default(),
            transition_ms: 1000.0,
            easing: Easing::default(),
            point_style: PointStyle::default(),
            tick_count: 10,
            year_floor: 2000.0,
            y_axis_title: "Years 2001-2017".to_string(),
            tooltip_offset: TooltipOffset::default(),
            data_url: "domestic_movie_data.csv".to_string(),
            container_selector: ".chart".to_string(),
        }
    }
}

impl ChartConfig {
    /// Parse JSON overrides on top of the defaults and validate the result.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AppError::Validation(format!("invalid chart config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(AppError::Validation(format!(
                "margins leave no plot area ({}x{})",
                self.plot_width(),
                self.plot_height()
            )));
        }
        if self.transition_ms < 0.0 {
            return Err(AppError::Validation("transition_ms must not be negative".to_string()));
        }
        if self.data_url.trim().is_empty() {
            return Err(AppError::Validation("data_url must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn plot_width(&self) -> f64 {
        self.svg_width - self.margin.left - self.margin.right
    }

    pub fn plot_height(&self) -> f64 {
        self.svg_height - self.margin.top - self.margin.bottom
    }

    pub fn scale_builder(&self) -> ScaleBuilder {
        ScaleBuilder::new(self.domain_padding, self.plot_width(), self.plot_height(), self.year_floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plot_area_matches_layout() {
        let config = ChartConfig::default();
        assert_eq!(config.plot_width(), 820.0);
        assert_eq!(config.plot_height(), 460.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            ChartConfig::from_json(r#"{ "transition_ms": 250, "easing": "linear" }"#).unwrap();
        assert_eq!(config.transition_ms, 250.0);
        assert_eq!(config.easing, Easing::Linear);
        assert_eq!(config.svg_width, 960.0);
        assert_eq!(config.data_url, "domestic_movie_data.csv");
    }

    #[test]
    fn oversized_margins_are_rejected() {
        let result = ChartConfig::from_json(r#"{ "svg_width": 100, "margin": { "top": 0, "right": 60, "bottom": 0, "left": 60 } }"#);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        assert!(matches!(ChartConfig::from_json("{"), Err(AppError::Validation(_))));
    }
}
