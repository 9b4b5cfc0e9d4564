use super::*;

impl TransactionRepo for Records {
    fn append_transaction(&mut self, transaction: &Transaction) -> Result<()> {
        if self.transactions.iter().any(|t| t.id == transaction.id) {
            return Err(Error::AlreadyExists);
        }
        self.transactions.push(transaction.clone());
        Ok(())
    }

    fn transactions_of_user(
        &self,
        user_id: &Id,
        pagination: &Pagination,
    ) -> Result<Vec<Transaction>> {
        let mut transactions: Vec<_> = self
            .transactions
            .iter()
            .filter(|t| t.user_id == *user_id)
            .cloned()
            .collect();
        transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let offset = pagination.offset.unwrap_or(0) as usize;
        let limit = pagination.limit.map_or(usize::MAX, |limit| limit as usize);
        Ok(transactions.into_iter().skip(offset).take(limit).collect())
    }
}
