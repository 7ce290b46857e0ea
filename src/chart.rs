//! Render-ready chart descriptions.
//!
//! A [`ChartSpec`] is plain data: the page script turns it into plotly.js
//! traces. Nothing here knows about HTTP or the launch table.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    #[serde(flatten)]
    pub data: ChartData,
}

/// Chart kind together with its rows and encodings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartData {
    Pie {
        slices: Vec<PieSlice>,
    },
    Scatter {
        x_title: String,
        y_title: String,
        series: Vec<ScatterSeries>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// Points sharing one colour (one booster category).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub color: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub class: u8,
    pub launch_site: String,
}

impl ChartSpec {
    pub fn pie(title: impl Into<String>, slices: Vec<PieSlice>) -> Self {
        Self {
            title: title.into(),
            data: ChartData::Pie { slices },
        }
    }

    pub fn scatter(
        title: impl Into<String>,
        x_title: impl Into<String>,
        y_title: impl Into<String>,
        series: Vec<ScatterSeries>,
    ) -> Self {
        Self {
            title: title.into(),
            data: ChartData::Scatter {
                x_title: x_title.into(),
                y_title: y_title.into(),
                series,
            },
        }
    }

    /// Pie slices, or an empty slice for a scatter chart.
    pub fn slices(&self) -> &[PieSlice] {
        match &self.data {
            ChartData::Pie { slices } => slices.as_slice(),
            ChartData::Scatter { .. } => &[],
        }
    }

    /// Scatter points across all series, or nothing for a pie chart.
    pub fn points(&self) -> impl Iterator<Item = &ScatterPoint> {
        let series: &[ScatterSeries] = match &self.data {
            ChartData::Scatter { series, .. } => series.as_slice(),
            ChartData::Pie { .. } => &[],
        };
        series.iter().flat_map(|s| s.points.iter())
    }

    /// Whether the chart has nothing to draw.
    pub fn is_empty(&self) -> bool {
        match &self.data {
            ChartData::Pie { slices } => slices.is_empty(),
            ChartData::Scatter { series, .. } => series.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pie_serializes_with_kind_tag() {
        let spec = ChartSpec::pie(
            "Total Success Launches By Site",
            vec![PieSlice { label: "KSC LC-39A".into(), value: 2 }],
        );
        let json = serde_json::to_value(&spec).expect("serialize");

        assert_eq!(json["kind"], "pie");
        assert_eq!(json["title"], "Total Success Launches By Site");
        assert_eq!(json["slices"][0]["label"], "KSC LC-39A");
        assert_eq!(json["slices"][0]["value"], 2);
    }

    #[test]
    fn empty_scatter_has_no_points() {
        let spec = ChartSpec::scatter("t", "x", "y", Vec::new());
        assert!(spec.is_empty());
        assert_eq!(spec.points().count(), 0);
        assert!(spec.slices().is_empty());
        assert_eq!(serde_json::to_value(&spec).expect("serialize")["kind"], "scatter");
    }
}
