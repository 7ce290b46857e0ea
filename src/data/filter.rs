use std::fmt;

use serde::{Deserialize, Deserializer};

use super::model::{LaunchRecord, LaunchTable};

/// Wire value of the "all sites" sentinel.
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Control state: the live dropdown and slider selections
// ---------------------------------------------------------------------------

/// The site dropdown selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Whether a record passes this selection.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.launch_site == *site,
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "{ALL_SITES}"),
            SiteSelection::Site(site) => write!(f, "{site}"),
        }
    }
}

impl<'de> Deserialize<'de> for SiteSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(SiteSelection::from(value.as_str()))
    }
}

/// The range slider selection, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

/// Snapshot of both controls, handed to the views per invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

// ---------------------------------------------------------------------------
// Row selection
// ---------------------------------------------------------------------------

/// Indices of rows satisfying `keep`, in table order.
fn indices_where(table: &LaunchTable, keep: impl Fn(&LaunchRecord) -> bool) -> Vec<usize> {
    table
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| keep(rec))
        .map(|(i, _)| i)
        .collect()
}

/// Rows with a successful outcome.
pub fn successful(table: &LaunchTable) -> Vec<usize> {
    indices_where(table, |rec| rec.class.is_success())
}

/// Rows launched from the selected site (every row for `All`).
pub fn at_site(table: &LaunchTable, site: &SiteSelection) -> Vec<usize> {
    indices_where(table, |rec| site.matches(rec))
}

/// Rows whose payload mass lies in `range`.
pub fn within_payload(table: &LaunchTable, range: PayloadRange) -> Vec<usize> {
    indices_where(table, |rec| range.contains(rec.payload_mass_kg))
}

/// Rows passing both the site and the payload selection.
pub fn select(table: &LaunchTable, controls: &ControlState) -> Vec<usize> {
    indices_where(table, |rec| {
        controls.payload.contains(rec.payload_mass_kg) && controls.site.matches(rec)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    fn table() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", 600.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 5000.0, Outcome::Success, "v1.1"),
            LaunchRecord::new("KSC LC-39A", 7000.0, Outcome::Success, "v1.1"),
        ])
    }

    #[test]
    fn sentinel_parses_to_all() {
        assert_eq!(SiteSelection::from("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::from("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".into())
        );
    }

    #[test]
    fn payload_bounds_are_inclusive() {
        let t = table();
        assert_eq!(within_payload(&t, PayloadRange::new(500.0, 5000.0)), vec![0, 1, 2]);
        assert_eq!(within_payload(&t, PayloadRange::new(600.0, 600.0)), vec![1]);
    }

    #[test]
    fn inverted_range_selects_nothing() {
        assert!(within_payload(&table(), PayloadRange::new(7000.0, 500.0)).is_empty());
    }

    #[test]
    fn unknown_site_selects_nothing() {
        assert!(at_site(&table(), &SiteSelection::from("Boca Chica")).is_empty());
    }

    #[test]
    fn select_combines_site_and_payload() {
        let controls = ControlState {
            site: SiteSelection::from("KSC LC-39A"),
            payload: PayloadRange::new(0.0, 6000.0),
        };
        assert_eq!(select(&table(), &controls), vec![2]);
        assert_eq!(successful(&table()), vec![0, 2, 3]);
    }
}
