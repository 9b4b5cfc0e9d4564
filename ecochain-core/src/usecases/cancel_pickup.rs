use super::prelude::*;

/// Cancels a pending pickup. Only the owning citizen may cancel, and only
/// while no collector has accepted yet. Cancellation has no ledger effect.
pub fn cancel_pickup<R: PickupRepo>(repo: &mut R, citizen: &Id, pickup_id: &Id) -> Result<()> {
    let mut pickup = repo.get_pickup(pickup_id)?;
    if !pickup.is_owned_by(citizen) {
        return Err(Error::Unauthorized);
    }
    if pickup.status != PickupStatus::Pending {
        return Err(Error::InvalidState(pickup.status));
    }
    pickup.status = PickupStatus::Cancelled;
    repo.update_pickup(&pickup)?;
    log::info!("Pickup {pickup_id} cancelled by citizen {citizen}");
    Ok(())
}
