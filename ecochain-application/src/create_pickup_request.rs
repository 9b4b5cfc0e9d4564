use super::*;

use ecochain_core::gateways::geocode::ReverseGeocodingGateway;

/// Files a new pickup request for the calling citizen.
///
/// When no postal address was submitted the reverse geocoding gateway is
/// asked for one. If that fails as well the literal coordinates are stored
/// so that collectors always see a usable location.
pub fn create_pickup_request(
    connections: &mem::Connections,
    geo_gw: &dyn ReverseGeocodingGateway,
    caller: Option<&Id>,
    mut new: usecases::NewPickupRequest,
) -> Result<Id> {
    let citizen = authenticated(caller)?;
    if new.location.address.trim().is_empty() {
        new.location.address = geo_gw
            .resolve_address(&new.location.pos)
            .unwrap_or_else(|| new.location.pos.to_string());
    }
    Ok(connections
        .exclusive()
        .transaction(|db| usecases::create_pickup_request(db, citizen, new))?)
}
