use super::prelude::*;
use crate::util::validate;

/// EcoPoints minted per kilogram of verified recycled material.
pub const POINTS_PER_KG: u32 = 10;

pub fn calc_eco_points(actual_weight_kg: f64) -> u64 {
    debug_assert!(validate::is_valid_weight(actual_weight_kg));
    (actual_weight_kg * f64::from(POINTS_PER_KG)).floor() as u64
}

#[derive(Debug, Clone)]
pub struct CompletePickup {
    pub pickup_id: Id,
    pub actual_weight_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedPickup {
    pub eco_points: u64,
    pub ledger_ref: LedgerRef,
}

/// Completes an accepted pickup and reconciles the ledger.
///
/// This is the only transition into the terminal success state and the
/// only place where points are minted. The four writes (pickup patch,
/// citizen balance, collector stats, ledger entry) must be wrapped in a
/// single store transaction by the caller so that they apply all-or-nothing.
pub fn complete_pickup<R>(repo: &mut R, collector: &Id, cmd: CompletePickup) -> Result<CompletedPickup>
where
    R: PickupRepo + UserRepo + TransactionRepo,
{
    let CompletePickup {
        pickup_id,
        actual_weight_kg,
    } = cmd;
    let mut pickup = repo.get_pickup(&pickup_id)?;
    if !pickup.is_assigned_to(collector) {
        return Err(Error::Unauthorized);
    }
    if pickup.status != PickupStatus::Accepted {
        return Err(Error::InvalidState(pickup.status));
    }
    if !validate::is_valid_weight(actual_weight_kg) {
        return Err(Error::Weight);
    }

    let eco_points = calc_eco_points(actual_weight_kg);
    let ledger_ref = LedgerRef::new();

    pickup.actual_weight_kg = Some(actual_weight_kg);
    pickup.status = PickupStatus::Completed;
    pickup.completed_at = Some(Timestamp::now());
    pickup.eco_points_earned = Some(eco_points);
    pickup.ledger_ref = Some(ledger_ref);
    repo.update_pickup(&pickup)?;

    let mut citizen = repo.get_user(&pickup.citizen_id)?;
    citizen.eco_points += eco_points;
    repo.update_user(&citizen)?;

    let mut collector_user = repo.get_user(collector)?;
    collector_user.total_collections += 1;
    repo.update_user(&collector_user)?;

    let description = format!(
        "Recycled {actual_weight_kg}kg of {material}",
        material = pickup.material_type
    );
    repo.append_transaction(&Transaction::earn(
        pickup.citizen_id.clone(),
        eco_points,
        description,
        pickup_id.clone(),
        ledger_ref,
    ))?;

    log::info!(
        "Pickup {pickup_id} completed by collector {collector}: \
         {eco_points} EcoPoints earned (ref {ledger_ref})"
    );
    Ok(CompletedPickup {
        eco_points,
        ledger_ref,
    })
}
