use super::*;

pub fn cancel_pickup(
    connections: &mem::Connections,
    caller: Option<&Id>,
    pickup_id: &Id,
) -> Result<()> {
    let citizen = authenticated(caller)?;
    Ok(connections
        .exclusive()
        .transaction(|db| usecases::cancel_pickup(db, citizen, pickup_id))?)
}
