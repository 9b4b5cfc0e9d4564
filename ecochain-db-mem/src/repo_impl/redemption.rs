use super::*;

impl RedemptionRepo for Records {
    fn create_redemption(&mut self, redemption: &Redemption) -> Result<()> {
        insert_new(
            &mut self.redemptions,
            redemption.id.clone(),
            redemption.clone(),
        )
    }

    fn update_redemption(&mut self, redemption: &Redemption) -> Result<()> {
        replace_existing(&mut self.redemptions, &redemption.id, redemption.clone())
    }

    fn get_redemption(&self, id: &Id) -> Result<Redemption> {
        self.redemptions.get(id).cloned().ok_or(Error::NotFound)
    }

    fn get_redemption_by_voucher(&self, voucher: &VoucherCode) -> Result<Redemption> {
        self.redemptions
            .values()
            .find(|r| r.voucher == *voucher)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn redemptions_of_user(&self, user_id: &Id) -> Result<Vec<Redemption>> {
        let mut redemptions: Vec<_> = self
            .redemptions
            .values()
            .filter(|r| r.user_id == *user_id)
            .cloned()
            .collect();
        redemptions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(redemptions)
    }

    fn pending_redemptions_expiring_before(&self, at: Timestamp) -> Result<Vec<Redemption>> {
        Ok(self
            .redemptions
            .values()
            .filter(|r| r.status == RedemptionStatus::Pending && r.expires_at <= at)
            .cloned()
            .collect())
    }
}
