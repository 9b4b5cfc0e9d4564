use super::*;

pub fn accept_pickup(
    connections: &mem::Connections,
    caller: Option<&Id>,
    pickup_id: &Id,
) -> Result<()> {
    let collector = authenticated(caller)?;
    Ok(connections.exclusive().transaction(|db| {
        usecases::accept_pickup(db, collector, pickup_id).map_err(|err| {
            warn!("Collector {collector} could not accept pickup {pickup_id}: {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn accept_assigns_the_collector() {
        let fixture = BackendFixture::new();
        let citizen = fixture.create_citizen("alice", 0);
        let collector = fixture.create_collector("bob");
        let pickup_id = fixture.request_pickup(&citizen);

        assert!(
            flows::accept_pickup(&fixture.db_connections, Some(&collector), &pickup_id).is_ok()
        );
        let pickup = fixture.get_pickup(&pickup_id);
        assert_eq!(PickupStatus::Accepted, pickup.status);
        assert!(pickup.is_assigned_to(&collector));
    }

    #[test]
    fn citizens_cannot_accept() {
        let fixture = BackendFixture::new();
        let citizen = fixture.create_citizen("alice", 0);
        let pickup_id = fixture.request_pickup(&citizen);

        assert!(matches!(
            flows::accept_pickup(&fixture.db_connections, Some(&citizen), &pickup_id),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::Unauthorized
            )))
        ));
    }
}
