use super::prelude::*;

/// Lets a freshly registered user pick whether they recycle or collect.
///
/// The role is set once. Picking the same role again is a no-op, picking
/// a different one fails. The admin role is never self-assigned.
pub fn choose_role<R: UserRepo>(repo: &mut R, user_id: &Id, role: Role) -> Result<()> {
    if role == Role::Admin {
        return Err(Error::Unauthorized);
    }
    let mut user = repo.get_user(user_id)?;
    match user.role {
        Some(current) if current == role => return Ok(()),
        Some(_) => return Err(Error::RoleAlreadyAssigned),
        None => {}
    }
    user.role = Some(role);
    repo.update_user(&user)?;
    log::info!("User {user_id} chose role {role}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::*, *},
        *,
    };

    fn seed_user_without_role(db: &mut MockDb) -> Id {
        let user = User::build().finish();
        let id = user.id.clone();
        db.create_user(&user).unwrap();
        id
    }

    #[test]
    fn assign_role_once() {
        let mut db = MockDb::default();
        let user = seed_user_without_role(&mut db);

        assert!(choose_role(&mut db, &user, Role::Collector).is_ok());
        assert_eq!(Some(Role::Collector), db.get_user(&user).unwrap().role);

        // Same role again is harmless
        assert!(choose_role(&mut db, &user, Role::Collector).is_ok());

        assert!(matches!(
            choose_role(&mut db, &user, Role::Citizen),
            Err(Error::RoleAlreadyAssigned)
        ));
        assert_eq!(Some(Role::Collector), db.get_user(&user).unwrap().role);
    }

    #[test]
    fn admin_cannot_be_chosen() {
        let mut db = MockDb::default();
        let user = seed_user_without_role(&mut db);

        assert!(matches!(
            choose_role(&mut db, &user, Role::Admin),
            Err(Error::Unauthorized)
        ));
        assert_eq!(None, db.get_user(&user).unwrap().role);
    }
}
