use super::prelude::*;

const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq)]
pub struct RecyclerRank {
    pub rank: usize,
    pub name: String,
    pub eco_points: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectorRank {
    pub rank: usize,
    pub name: String,
    pub total_collections: u64,
    pub rating: AvgRatingValue,
}

fn display_name(user: &User) -> String {
    user.name.clone().unwrap_or_else(|| ANONYMOUS.to_string())
}

/// The citizens with the highest EcoPoint balance, best first.
pub fn top_recyclers<R: UserRepo>(repo: &R, limit: usize) -> Result<Vec<RecyclerRank>> {
    let mut citizens: Vec<_> = repo
        .all_users()?
        .into_iter()
        .filter(User::is_citizen)
        .collect();
    citizens.sort_by(|a, b| b.eco_points.cmp(&a.eco_points));
    Ok(citizens
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, user)| RecyclerRank {
            rank: i + 1,
            name: display_name(&user),
            eco_points: user.eco_points,
        })
        .collect())
}

/// The collectors with the most completed pickups, best first.
pub fn top_collectors<R: UserRepo>(repo: &R, limit: usize) -> Result<Vec<CollectorRank>> {
    let mut collectors: Vec<_> = repo
        .all_users()?
        .into_iter()
        .filter(User::is_collector)
        .collect();
    collectors.sort_by(|a, b| b.total_collections.cmp(&a.total_collections));
    Ok(collectors
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, user)| CollectorRank {
            rank: i + 1,
            name: display_name(&user),
            total_collections: user.total_collections,
            rating: user.rating,
        })
        .collect())
}
