use launch_dash::color::ColorMap;
use launch_dash::data::filter::{self, ControlState, PayloadRange, SiteSelection};
use launch_dash::data::model::{LaunchRecord, LaunchTable, Outcome};
use launch_dash::layout::LAUNCH_SITES;
use launch_dash::views::{payload_scatter, success_pie};
use proptest::prelude::*;

const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn record() -> impl Strategy<Value = LaunchRecord> {
    (0usize..LAUNCH_SITES.len(), 0.0f64..12_000.0, any::<bool>(), 0usize..BOOSTERS.len()).prop_map(
        |(site, payload, success, booster)| {
            let class = if success { Outcome::Success } else { Outcome::Failure };
            LaunchRecord::new(LAUNCH_SITES[site], payload.round(), class, BOOSTERS[booster])
        },
    )
}

fn table() -> impl Strategy<Value = LaunchTable> {
    prop::collection::vec(record(), 0..64).prop_map(LaunchTable::from_records)
}

fn site() -> impl Strategy<Value = SiteSelection> {
    prop_oneof![
        Just(SiteSelection::All),
        (0usize..LAUNCH_SITES.len()).prop_map(|i| SiteSelection::from(LAUNCH_SITES[i])),
    ]
}

fn range() -> impl Strategy<Value = PayloadRange> {
    (0.0f64..10_000.0, 0.0f64..10_000.0)
        .prop_map(|(a, b)| PayloadRange::new(a.min(b), a.max(b)))
}

proptest! {
    #[test]
    fn filtering_is_idempotent(table in table(), site in site(), range in range()) {
        let controls = ControlState { site, payload: range };
        let once = filter::select(&table, &controls);

        let narrowed = LaunchTable::from_records(
            once.iter().map(|&i| table.records()[i].clone()).collect(),
        );
        let twice = filter::select(&narrowed, &controls);

        prop_assert_eq!(twice, (0..once.len()).collect::<Vec<_>>());
        prop_assert_eq!(filter::select(&table, &controls), once);
    }

    #[test]
    fn all_sites_pie_sums_to_total_successes(table in table()) {
        let spec = success_pie(&table, &SiteSelection::All);
        let total: u64 = spec.slices().iter().map(|s| s.value).sum();
        prop_assert_eq!(total as usize, table.success_count());
    }

    #[test]
    fn site_pie_sums_to_rows_at_site(table in table(), idx in 0usize..LAUNCH_SITES.len()) {
        let name = LAUNCH_SITES[idx];
        let spec = success_pie(&table, &SiteSelection::from(name));
        let total: u64 = spec.slices().iter().map(|s| s.value).sum();
        let rows = table.records().iter().filter(|r| r.launch_site == name).count();

        prop_assert_eq!(total as usize, rows);
        prop_assert!(spec.slices().len() <= 2);
    }

    #[test]
    fn scatter_points_respect_range_and_site(
        table in table(),
        site in site(),
        range in range()
    ) {
        let colors = ColorMap::new(table.booster_categories());
        let spec = payload_scatter(&table, &colors, &site, range);

        for p in spec.points() {
            prop_assert!(range.low <= p.payload_mass_kg && p.payload_mass_kg <= range.high);
            if let SiteSelection::Site(name) = &site {
                prop_assert_eq!(&p.launch_site, name);
            }
        }

        let expected = filter::select(&table, &ControlState { site, payload: range }).len();
        prop_assert_eq!(spec.points().count(), expected);
    }
}
