/// A weight is only meaningful if it is a positive, finite number
/// of kilograms.
pub fn is_valid_weight(kg: f64) -> bool {
    kg.is_finite() && kg > 0.0
}
