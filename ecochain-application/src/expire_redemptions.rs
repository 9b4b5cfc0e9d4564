use super::*;

/// Scheduled sweep that marks overdue pending redemptions as expired.
pub fn expire_redemptions(connections: &mem::Connections) -> Result<usize> {
    Ok(connections
        .exclusive()
        .transaction(|db| usecases::expire_redemptions(db, Timestamp::now()))?)
}
