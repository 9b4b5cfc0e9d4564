use super::prelude::*;

/// Toggles whether a collector is shown open pickup requests.
pub fn set_collector_availability<R: UserRepo>(
    repo: &mut R,
    collector: &Id,
    is_available: bool,
) -> Result<()> {
    let mut user = repo.get_user(collector)?;
    if !user.is_collector() {
        return Err(Error::Unauthorized);
    }
    user.is_available = is_available;
    repo.update_user(&user)?;
    log::debug!("Collector {collector} is now available: {is_available}");
    Ok(())
}
