use crate::entities::MapPoint;

/// Best-effort address lookup for a coordinate.
///
/// Implementations return `None` on any failure; callers are expected to
/// fall back to the literal coordinates.
pub trait ReverseGeocodingGateway {
    fn resolve_address(&self, pos: &MapPoint) -> Option<String>;
}

/// No-op gateway for embedders without a geocoding service.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoReverseGeocoding;

impl ReverseGeocodingGateway for NoReverseGeocoding {
    fn resolve_address(&self, _: &MapPoint) -> Option<String> {
        None
    }
}
