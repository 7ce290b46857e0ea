use crate::chart::{ChartSpec, PieSlice, ScatterPoint, ScatterSeries};
use crate::color::ColorMap;
use crate::data::filter::{self, ControlState, PayloadRange, SiteSelection};
use crate::data::model::{COL_CLASS, COL_PAYLOAD_MASS, LaunchTable};

// ---------------------------------------------------------------------------
// Success-distribution pie
// ---------------------------------------------------------------------------

/// Pie chart of launch outcomes for the selected site.
///
/// * `All` – successful launches counted per site, in first-appearance order.
/// * a site – that site's launches counted per outcome class, ascending;
///   classes with no launches are left out.
pub fn success_pie(table: &LaunchTable, site: &SiteSelection) -> ChartSpec {
    let records = table.records();

    match site {
        SiteSelection::All => {
            let mut slices: Vec<PieSlice> = Vec::new();
            for idx in filter::successful(table) {
                let site = &records[idx].launch_site;
                match slices.iter_mut().find(|s| s.label == *site) {
                    Some(slice) => slice.value += 1,
                    None => slices.push(PieSlice {
                        label: site.clone(),
                        value: 1,
                    }),
                }
            }
            ChartSpec::pie("Total Success Launches By Site", slices)
        }
        SiteSelection::Site(name) => {
            let mut counts = [0u64; 2];
            for idx in filter::at_site(table, site) {
                counts[records[idx].class.as_class() as usize] += 1;
            }
            let slices = counts
                .iter()
                .enumerate()
                .filter(|(_, &n)| n > 0)
                .map(|(class, &n)| PieSlice {
                    label: class.to_string(),
                    value: n,
                })
                .collect();
            ChartSpec::pie(format!("Total Success Launches for site {name}"), slices)
        }
    }
}

// ---------------------------------------------------------------------------
// Payload-correlation scatter
// ---------------------------------------------------------------------------

/// Scatter of payload mass against outcome class, one series per booster
/// category, restricted to `range` and the selected site.
pub fn payload_scatter(
    table: &LaunchTable,
    colors: &ColorMap,
    site: &SiteSelection,
    range: PayloadRange,
) -> ChartSpec {
    let records = table.records();
    let controls = ControlState {
        site: site.clone(),
        payload: range,
    };

    let mut series: Vec<ScatterSeries> = Vec::new();
    for idx in filter::select(table, &controls) {
        let rec = &records[idx];
        let point = ScatterPoint {
            payload_mass_kg: rec.payload_mass_kg,
            class: rec.class.as_class(),
            launch_site: rec.launch_site.clone(),
        };
        match series
            .iter_mut()
            .find(|s| s.name == rec.booster_version_category)
        {
            Some(s) => s.points.push(point),
            None => series.push(ScatterSeries {
                name: rec.booster_version_category.clone(),
                color: colors.color_for(&rec.booster_version_category).to_string(),
                points: vec![point],
            }),
        }
    }

    let title = match site {
        SiteSelection::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteSelection::Site(name) => format!("Correlation between Payload and Success for {name}"),
    };

    ChartSpec::scatter(title, COL_PAYLOAD_MASS, COL_CLASS, series)
}
