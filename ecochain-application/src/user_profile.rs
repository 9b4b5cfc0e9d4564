use super::*;

pub fn choose_role(connections: &mem::Connections, caller: Option<&Id>, role: Role) -> Result<()> {
    let user = authenticated(caller)?;
    Ok(connections
        .exclusive()
        .transaction(|db| usecases::choose_role(db, user, role))?)
}

pub fn set_collector_availability(
    connections: &mem::Connections,
    caller: Option<&Id>,
    is_available: bool,
) -> Result<()> {
    let collector = authenticated(caller)?;
    Ok(connections
        .exclusive()
        .transaction(|db| usecases::set_collector_availability(db, collector, is_available))?)
}
