use crate::geo::MapPoint;

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub address: String,
    pub pos: MapPoint,
}
