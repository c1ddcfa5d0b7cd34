//! Plot-ready series for a rendering surface.
//!
//! Nothing here draws; it only arranges a `CurveReport` into the line, marker
//! and scatter data a chart needs, in a form that serializes cleanly to JSON.

use serde::Serialize;

use crate::curve_service::CurveReport;
use crate::error::AppResult;

/// Generic x-y curve data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveData {
    /// X-axis values
    pub x_values: Vec<f64>,
    /// Y-axis values (same length as x_values)
    pub y_values: Vec<f64>,
    /// Human-readable label for legend
    pub label: String,
}

/// Axis label and units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub name: String,
    pub units: Option<String>,
}

impl AxisLabel {
    pub fn with_units(name: impl Into<String>, units: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: Some(units.into()),
        }
    }

    pub fn display(&self) -> String {
        if let Some(ref units) = self.units {
            format!("{} ({})", self.name, units)
        } else {
            self.name.clone()
        }
    }
}

/// Everything a Bo-vs-pressure chart shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSeries {
    pub title: String,
    pub x_axis: AxisLabel,
    pub y_axis: AxisLabel,
    /// Computed Bo line
    pub computed: CurveData,
    /// Bubble-point marker
    pub bubble_point: CurveData,
    /// Measured points, drawn as a scatter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<CurveData>,
}

pub fn plot_series(report: &CurveReport) -> PlotSeries {
    let curve = &report.curve;
    let bubble_point = &report.bubble_point;

    PlotSeries {
        title: "Formation Volume Factor vs Pressure".to_string(),
        x_axis: AxisLabel::with_units("Pressure", "psia"),
        y_axis: AxisLabel::with_units("Formation Volume Factor", "bbl/STB"),
        computed: CurveData {
            x_values: curve.pressures(),
            y_values: curve.bo_values(),
            label: format!(
                "Calculated FVF (Rs: {}, Bo: {})",
                curve.rs_method, curve.bo_method
            ),
        },
        bubble_point: CurveData {
            x_values: vec![bubble_point.pb],
            y_values: vec![bubble_point.sample_bo],
            label: "Bubble Point".to_string(),
        },
        reference: report.reference.as_ref().map(|table| CurveData {
            x_values: table.pressures(),
            y_values: table.fvf_values(),
            label: "Reference Data".to_string(),
        }),
    }
}

pub fn plot_series_json(report: &CurveReport) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&plot_series(report))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve_service::{CurveRequest, run_curve};
    use crate::reference::parse_reference_table;
    use pvt_correlations::{BoMethod, ReservoirInputs, RsMethod};

    fn report() -> CurveReport {
        let inputs = ReservoirInputs::new(5868.0, 6899.0, 42.002, 0.709, 292.1).unwrap();
        run_curve(&CurveRequest::new(inputs, RsMethod::Glaso, BoMethod::Glaso)).unwrap()
    }

    #[test]
    fn axis_label_display() {
        assert_eq!(
            AxisLabel::with_units("Pressure", "psia").display(),
            "Pressure (psia)"
        );
        let bare = AxisLabel {
            name: "Ratio".to_string(),
            units: None,
        };
        assert_eq!(bare.display(), "Ratio");
    }

    #[test]
    fn marker_sits_on_nearest_sample() {
        let report = report();
        let series = plot_series(&report);
        assert_eq!(series.computed.x_values.len(), 1000);
        assert_eq!(series.bubble_point.x_values, vec![5868.0]);
        assert_eq!(
            series.bubble_point.y_values,
            vec![report.curve.samples()[report.bubble_point.sample_index].bo]
        );
        assert!(series.reference.is_none());
    }

    #[test]
    fn reference_becomes_scatter() {
        let table = parse_reference_table("Pressure,FVF\n6000,1.95\n", "Pressure", "FVF").unwrap();
        let series = plot_series(&report().with_reference(table));
        let reference = series.reference.unwrap();
        assert_eq!(reference.x_values, vec![6000.0]);
        assert_eq!(reference.y_values, vec![1.95]);
    }

    #[test]
    fn json_omits_missing_reference() {
        let json = plot_series_json(&report()).unwrap();
        assert!(json.contains("\"bubble_point\""));
        assert!(!json.contains("\"reference\""));
    }
}
