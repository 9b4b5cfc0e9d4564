use super::prelude::*;

/// Assigns a pending pickup to the calling collector.
///
/// At most one collector can ever win this transition: the status check
/// and the mutation run inside the caller's exclusive store transaction,
/// so a concurrent second accept observes `accepted` and fails.
pub fn accept_pickup<R>(repo: &mut R, collector: &Id, pickup_id: &Id) -> Result<()>
where
    R: PickupRepo + UserRepo,
{
    let user = repo.get_user(collector)?;
    if !user.is_collector() {
        return Err(Error::Unauthorized);
    }
    let mut pickup = repo.get_pickup(pickup_id)?;
    if pickup.status != PickupStatus::Pending {
        return Err(Error::InvalidState(pickup.status));
    }
    pickup.collector_id = Some(collector.clone());
    pickup.status = PickupStatus::Accepted;
    repo.update_pickup(&pickup)?;
    log::info!("Pickup {pickup_id} accepted by collector {collector}");
    Ok(())
}
