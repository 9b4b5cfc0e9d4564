use crate::entities::*;

/// Computes a collector's running average rating from all rated,
/// completed pickups assigned to that collector.
///
/// Plain arithmetic mean, recomputed from scratch on every new rating.
pub fn avg_collector_rating(pickups: &[PickupRequest]) -> AvgRatingValue {
    pickups
        .iter()
        .filter(|p| p.status == PickupStatus::Completed)
        .filter_map(|p| p.collector_rating.as_ref())
        .fold(AvgRatingValueBuilder::default(), |mut acc, rating| {
            acc.add(rating.value);
            acc
        })
        .build()
}
