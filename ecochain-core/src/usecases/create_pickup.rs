use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewPickupRequest {
    pub material_type: MaterialType,
    pub estimated_weight_kg: f64,
    pub location: Location,
    pub notes: Option<String>,
    pub scheduled_at: Option<Timestamp>,
}

pub fn create_pickup_request<R>(repo: &mut R, citizen: &Id, new: NewPickupRequest) -> Result<Id>
where
    R: PickupRepo + UserRepo,
{
    let NewPickupRequest {
        material_type,
        estimated_weight_kg,
        location,
        notes,
        scheduled_at,
    } = new;
    if !validate::is_valid_weight(estimated_weight_kg) {
        return Err(Error::Weight);
    }
    if !location.pos.is_valid() {
        return Err(Error::InvalidPosition);
    }
    // The citizen record must exist. A chosen role is not required to
    // request pickups.
    repo.get_user(citizen)?;

    let id = Id::new();
    let pickup = PickupRequest {
        id: id.clone(),
        citizen_id: citizen.clone(),
        collector_id: None,
        material_type,
        estimated_weight_kg,
        actual_weight_kg: None,
        status: PickupStatus::Pending,
        location,
        notes,
        created_at: Timestamp::now(),
        scheduled_at,
        completed_at: None,
        eco_points_earned: None,
        ledger_ref: None,
        citizen_rating: None,
        collector_rating: None,
    };
    log::debug!("Creating pickup request {id} for citizen {citizen}");
    repo.create_pickup(&pickup)?;
    Ok(id)
}
