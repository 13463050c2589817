//! Basic vector math helper functions.
//! Guarded normalisation and horizontal-plane projection shared by the
//! behaviour and movement code.
use glam::Vec3;

/// Returns the unit vector in the direction of `vector`.
///
/// The input is checked for finiteness and non-zero length before
/// normalising. Invalid or zero-length vectors yield [`Vec3::ZERO`] rather
/// than NaN components, which is the contract the pursuer relies on when
/// the two characters coincide.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use pursuit::vector_math::normalize_or_zero;
///
/// let unit = normalize_or_zero(Vec3::new(3.0, 0.0, 4.0));
/// assert!((unit.x - 0.6).abs() < 1e-6);
/// assert!((unit.z - 0.8).abs() < 1e-6);
///
/// assert_eq!(normalize_or_zero(Vec3::ZERO), Vec3::ZERO);
/// ```
pub fn normalize_or_zero(vector: Vec3) -> Vec3 {
    if !vector.is_finite() {
        return Vec3::ZERO;
    }

    vector.try_normalize().unwrap_or(Vec3::ZERO)
}

/// Projects a vector onto the horizontal plane by zeroing its vertical
/// component.
///
/// Locomotion is horizontal-plane only; walk vectors pass through here
/// before they reach the motion sink.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use pursuit::vector_math::flatten;
///
/// assert_eq!(flatten(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 0.0, 3.0));
/// ```
pub fn flatten(vector: Vec3) -> Vec3 {
    Vec3::new(vector.x, 0.0, vector.z)
}
