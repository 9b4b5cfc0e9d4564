use super::*;

impl StoreRepo for Records {
    fn create_store(&mut self, store: &PartnerStore) -> Result<()> {
        insert_new(&mut self.stores, store.id.clone(), store.clone())
    }

    fn get_store(&self, id: &Id) -> Result<PartnerStore> {
        self.stores.get(id).cloned().ok_or(Error::NotFound)
    }

    fn active_stores(&self) -> Result<Vec<PartnerStore>> {
        let mut stores: Vec<_> = self
            .stores
            .values()
            .filter(|s| s.is_active)
            .cloned()
            .collect();
        stores.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(stores)
    }
}
