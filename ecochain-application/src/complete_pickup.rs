use super::*;

/// Completes a pickup and reconciles the EcoPoints ledger.
///
/// The pickup patch, both user updates and the ledger entry are committed
/// together or not at all.
pub fn complete_pickup(
    connections: &mem::Connections,
    caller: Option<&Id>,
    cmd: usecases::CompletePickup,
) -> Result<usecases::CompletedPickup> {
    let collector = authenticated(caller)?;
    Ok(connections.exclusive().transaction(|db| {
        usecases::complete_pickup(db, collector, cmd).map_err(|err| {
            warn!("Collector {collector} could not complete a pickup: {err}");
            err
        })
    })?)
}
