use serde::Serialize;

use super::Category;

/// Rough average distance in light years for the categories that contribute
/// to the light-year total.
pub const AVERAGE_DISTANCES: [(Category, u64); 4] = [
    (Category::Galaxies, 25_000_000),
    (Category::Nebulae, 3_000),
    (Category::StarClusters, 10_000),
    (Category::Supernovae, 30_000_000),
];

/// Estimated integration time per deep-sky image.
pub const HOURS_PER_OBJECT: u64 = 8;

/// Headline numbers for the home page statistics panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct SkyStats {
    pub light_years: u64,
    pub galaxies: u64,
    pub hours: u64,
    pub objects: u64,
}

impl SkyStats {
    /// Build from per-category counts.
    pub fn from_counts(counts: &[(Category, u64)]) -> Self {
        let count_of = |category: Category| {
            counts
                .iter()
                .filter(|(c, _)| *c == category)
                .map(|(_, n)| *n)
                .sum::<u64>()
        };
        let objects: u64 = counts.iter().map(|(_, n)| *n).sum();
        let light_years = AVERAGE_DISTANCES
            .iter()
            .map(|(category, distance)| count_of(*category).saturating_mul(*distance))
            .fold(0u64, u64::saturating_add);

        Self {
            light_years,
            galaxies: count_of(Category::Galaxies),
            hours: objects * HOURS_PER_OBJECT,
            objects,
        }
    }

    /// Targets in display order, for [`crate::widgets::CounterAnimation`].
    pub fn counter_targets(&self) -> Vec<u64> {
        vec![self.light_years, self.galaxies, self.hours, self.objects]
    }
}
