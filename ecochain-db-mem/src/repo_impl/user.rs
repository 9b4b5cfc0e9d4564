use super::*;

impl UserRepo for Records {
    fn create_user(&mut self, user: &User) -> Result<()> {
        insert_new(&mut self.users, user.id.clone(), user.clone())
    }

    fn update_user(&mut self, user: &User) -> Result<()> {
        replace_existing(&mut self.users, &user.id, user.clone())
    }

    fn get_user(&self, id: &Id) -> Result<User> {
        self.users.get(id).cloned().ok_or(Error::NotFound)
    }

    fn try_get_user(&self, id: &Id) -> Result<Option<User>> {
        Ok(self.users.get(id).cloned())
    }

    fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.users.values().cloned().collect())
    }

    fn count_users(&self) -> Result<usize> {
        Ok(self.users.len())
    }
}
