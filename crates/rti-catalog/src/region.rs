//! Region identifiers and department → region inference.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A region the site has department templates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionId {
    Telangana,
    JammuAndKashmir,
    Delhi,
}

impl RegionId {
    /// Every region, in catalog order.
    pub const ALL: [RegionId; 3] = [
        RegionId::Telangana,
        RegionId::JammuAndKashmir,
        RegionId::Delhi,
    ];

    /// The URL slug, which is also the key in the region store.
    pub fn slug(self) -> &'static str {
        match self {
            RegionId::Telangana => "telangana",
            RegionId::JammuAndKashmir => "jammu-and-kashmir",
            RegionId::Delhi => "delhi",
        }
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            RegionId::Telangana => "Telangana",
            RegionId::JammuAndKashmir => "Jammu and Kashmir",
            RegionId::Delhi => "Delhi",
        }
    }

    /// Parses a slug, ignoring case.
    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.to_lowercase();
        Self::ALL.into_iter().find(|region| region.slug() == slug)
    }
}

impl Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Region assigned to department names that match no rule.
pub const DEFAULT_REGION: RegionId = RegionId::Delhi;

/// Ordered (lowercase needle, region) rules. First match wins.
const INFERENCE_RULES: &[(&str, RegionId)] = &[
    ("telangana", RegionId::Telangana),
    ("jammu", RegionId::JammuAndKashmir),
    ("kashmir", RegionId::JammuAndKashmir),
];

/// Guesses which region a department belongs to from its display name.
///
/// Matching is a case-insensitive substring test against
/// `INFERENCE_RULES` in order. Anything that matches no rule is attributed
/// to [`DEFAULT_REGION`], so a department from a region without a rule is
/// silently reported as Delhi rather than as unknown.
pub fn infer_region(department: &str) -> RegionId {
    let name = department.to_lowercase();
    INFERENCE_RULES
        .iter()
        .find(|(needle, _)| name.contains(*needle))
        .map_or(DEFAULT_REGION, |&(_, region)| region)
}
