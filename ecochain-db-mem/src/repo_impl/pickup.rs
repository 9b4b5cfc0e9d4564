use super::*;

impl Records {
    fn filter_pickups(&self, f: impl Fn(&PickupRequest) -> bool) -> Vec<PickupRequest> {
        let mut pickups: Vec<_> = self.pickups.values().filter(|p| f(p)).cloned().collect();
        newest_first(&mut pickups);
        pickups
    }
}

impl PickupRepo for Records {
    fn create_pickup(&mut self, pickup: &PickupRequest) -> Result<()> {
        insert_new(&mut self.pickups, pickup.id.clone(), pickup.clone())
    }

    fn update_pickup(&mut self, pickup: &PickupRequest) -> Result<()> {
        replace_existing(&mut self.pickups, &pickup.id, pickup.clone())
    }

    fn get_pickup(&self, id: &Id) -> Result<PickupRequest> {
        self.pickups.get(id).cloned().ok_or(Error::NotFound)
    }

    fn pickups_of_citizen(&self, citizen_id: &Id) -> Result<Vec<PickupRequest>> {
        Ok(self.filter_pickups(|p| p.is_owned_by(citizen_id)))
    }

    fn pickups_of_collector(&self, collector_id: &Id) -> Result<Vec<PickupRequest>> {
        Ok(self.filter_pickups(|p| p.is_assigned_to(collector_id)))
    }

    fn pickups_with_status(&self, status: PickupStatus) -> Result<Vec<PickupRequest>> {
        Ok(self.filter_pickups(|p| p.status == status))
    }

    fn count_pickups(&self) -> Result<usize> {
        Ok(self.pickups.len())
    }
}
