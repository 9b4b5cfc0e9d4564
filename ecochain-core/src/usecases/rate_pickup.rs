use super::prelude::*;
use crate::rating::avg_collector_rating;

#[derive(Debug, Clone)]
pub struct NewRating {
    pub pickup_id: Id,
    pub value: u8,
    pub feedback: Option<String>,
}

fn parse_rating_value(value: u8) -> Result<RatingValue> {
    let value = RatingValue::from(value);
    if !value.is_valid() {
        return Err(Error::RatingValue);
    }
    Ok(value)
}

/// The collector rates the citizen of a completed pickup. One-shot.
pub fn rate_citizen<R: PickupRepo>(repo: &mut R, collector: &Id, rating: NewRating) -> Result<()> {
    let NewRating {
        pickup_id,
        value,
        feedback,
    } = rating;
    let value = parse_rating_value(value)?;
    let mut pickup = repo.get_pickup(&pickup_id)?;
    if !pickup.is_assigned_to(collector) {
        return Err(Error::Unauthorized);
    }
    if pickup.status != PickupStatus::Completed {
        return Err(Error::InvalidState(pickup.status));
    }
    if pickup.citizen_rating.is_some() {
        return Err(Error::AlreadyRated);
    }
    pickup.citizen_rating = Some(PickupRating {
        value,
        feedback,
        created_at: Timestamp::now(),
    });
    repo.update_pickup(&pickup)?;
    Ok(())
}

/// The citizen rates the collector of a completed pickup. One-shot.
///
/// Also recomputes the collector's running average rating across all of
/// that collector's rated completed pickups.
pub fn rate_collector<R>(repo: &mut R, citizen: &Id, rating: NewRating) -> Result<()>
where
    R: PickupRepo + UserRepo,
{
    let NewRating {
        pickup_id,
        value,
        feedback,
    } = rating;
    let value = parse_rating_value(value)?;
    let mut pickup = repo.get_pickup(&pickup_id)?;
    if !pickup.is_owned_by(citizen) {
        return Err(Error::Unauthorized);
    }
    if pickup.status != PickupStatus::Completed {
        return Err(Error::InvalidState(pickup.status));
    }
    if pickup.collector_rating.is_some() {
        return Err(Error::AlreadyRated);
    }
    pickup.collector_rating = Some(PickupRating {
        value,
        feedback,
        created_at: Timestamp::now(),
    });
    repo.update_pickup(&pickup)?;

    if let Some(collector_id) = pickup.collector_id {
        let pickups = repo.pickups_of_collector(&collector_id)?;
        let rating = avg_collector_rating(&pickups);
        let mut collector = repo.get_user(&collector_id)?;
        collector.rating = rating;
        repo.update_user(&collector)?;
        log::debug!(
            "Updated average rating of collector {collector_id} to {rating:?}",
        );
    }
    Ok(())
}
