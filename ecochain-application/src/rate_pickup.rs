use super::*;

/// The citizen rates the collector of a completed pickup.
pub fn rate_collector(
    connections: &mem::Connections,
    caller: Option<&Id>,
    rating: usecases::NewRating,
) -> Result<()> {
    let citizen = authenticated(caller)?;
    Ok(connections
        .exclusive()
        .transaction(|db| usecases::rate_collector(db, citizen, rating))?)
}

/// The collector rates the citizen of a completed pickup.
pub fn rate_citizen(
    connections: &mem::Connections,
    caller: Option<&Id>,
    rating: usecases::NewRating,
) -> Result<()> {
    let collector = authenticated(caller)?;
    Ok(connections
        .exclusive()
        .transaction(|db| usecases::rate_citizen(db, collector, rating))?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn completed_pickup(fixture: &BackendFixture, citizen: &Id, collector: &Id) -> Id {
        let pickup_id = fixture.accepted_pickup(citizen, collector);
        flows::complete_pickup(
            &fixture.db_connections,
            Some(collector),
            usecases::CompletePickup {
                pickup_id: pickup_id.clone(),
                actual_weight_kg: 1.0,
            },
        )
        .unwrap();
        pickup_id
    }

    #[test]
    fn mutual_ratings_after_completion() {
        let fixture = BackendFixture::new();
        let citizen = fixture.create_citizen("alice", 0);
        let collector = fixture.create_collector("bob");
        let pickup_id = completed_pickup(&fixture, &citizen, &collector);

        assert!(flows::rate_collector(
            &fixture.db_connections,
            Some(&citizen),
            usecases::NewRating {
                pickup_id: pickup_id.clone(),
                value: 4,
                feedback: Some("friendly".into()),
            },
        )
        .is_ok());
        assert!(flows::rate_citizen(
            &fixture.db_connections,
            Some(&collector),
            usecases::NewRating {
                pickup_id: pickup_id.clone(),
                value: 5,
                feedback: None,
            },
        )
        .is_ok());

        let pickup = fixture.get_pickup(&pickup_id);
        assert!(pickup.collector_rating.is_some());
        assert!(pickup.citizen_rating.is_some());
        assert_eq!(
            AvgRatingValue::from(4.0),
            fixture.get_user(&collector).rating
        );
    }
}
