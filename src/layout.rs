//! Static description of the dashboard page.

use serde::Serialize;

use crate::data::filter::ALL_SITES;
use crate::data::model::LaunchTable;

pub const PAGE_HEADING: &str = "SpaceX Launch Records Dashboard";

/// Sites offered by the dropdown, in display order.
pub const LAUNCH_SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10000.0;
pub const SLIDER_STEP: f64 = 1000.0;
pub const SLIDER_MARKS: [f64; 5] = [0.0, 2500.0, 5000.0, 7500.0, 10000.0];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayout {
    pub heading: String,
    pub site_dropdown: Dropdown,
    pub payload_slider: RangeSlider,
    pub pie_output_id: String,
    pub scatter_output_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub id: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
    /// Initial `[low, high]` selection. Browsers round a range input's value
    /// to the nearest `step`, so a bound such as 362 kg shows as 0 on the
    /// thumb while the charts still use 362.
    pub value: [f64; 2],
}

impl PageLayout {
    /// Page description for `table`; the slider starts on the observed
    /// payload bounds.
    ///
    /// The slider's own bounds stay fixed at `0..=10000`. When the observed
    /// maximum lies above that, the default selection extends past the
    /// visible track; this is logged rather than corrected.
    pub fn for_table(table: &LaunchTable) -> Self {
        let (min_payload, max_payload) = table.payload_bounds();
        if min_payload < SLIDER_MIN || max_payload > SLIDER_MAX {
            log::warn!(
                "Observed payload range {min_payload}..={max_payload} kg exceeds slider bounds {SLIDER_MIN}..={SLIDER_MAX}"
            );
        }

        let options = std::iter::once(DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        })
        .chain(LAUNCH_SITES.iter().map(|site| DropdownOption {
            label: site.to_string(),
            value: site.to_string(),
        }))
        .collect();

        PageLayout {
            heading: PAGE_HEADING.to_string(),
            site_dropdown: Dropdown {
                id: "site-dropdown".to_string(),
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site here".to_string(),
            },
            payload_slider: RangeSlider {
                id: "payload-slider".to_string(),
                label: "Payload range (Kg):".to_string(),
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                marks: SLIDER_MARKS.to_vec(),
                value: [min_payload, max_payload],
            },
            pie_output_id: "success-pie-chart".to_string(),
            scatter_output_id: "success-payload-scatter-chart".to_string(),
        }
    }
}
