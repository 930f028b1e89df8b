use std::f64::consts::PI;

/// Angle normalization and compass-to-math conversions.
///
/// Headings are compass style: degrees clockwise from north. Projection
/// works in the usual x-east, y-north frame with radians counterclockwise
/// from east.
pub struct AngleHelper;

impl AngleHelper {
    /// Normalizes degrees into (-180, 180].
    pub fn wrap_to_180(deg: f64) -> f64 {
        if !deg.is_finite() {
            return deg;
        }
        let mut wrapped = deg % 360.0;
        if wrapped > 180.0 {
            wrapped -= 360.0;
        } else if wrapped <= -180.0 {
            wrapped += 360.0;
        }
        wrapped
    }

    /// Normalizes degrees into [0, 360).
    pub fn wrap_to_360(deg: f64) -> f64 {
        if !deg.is_finite() {
            return deg;
        }
        let mut wrapped = deg % 360.0;
        if wrapped < 0.0 {
            wrapped += 360.0;
        }
        // -1e-20 + 360.0 rounds up to 360.0
        if wrapped >= 360.0 {
            wrapped = 0.0;
        }
        wrapped
    }

    /// Normalizes radians into [-PI, PI].
    pub fn wrap_radians(rad: f64) -> f64 {
        if !rad.is_finite() {
            return rad;
        }
        let mut wrapped = rad % (2.0 * PI);
        if wrapped > PI {
            wrapped -= 2.0 * PI;
        } else if wrapped < -PI {
            wrapped += 2.0 * PI;
        }
        wrapped
    }

    /// Converts a compass heading in degrees into a math angle in radians.
    pub fn heading_to_math_angle(deg: f64) -> f64 {
        Self::wrap_radians((90.0 - deg).to_radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn wrap_to_180_keeps_upper_bound_inclusive() {
        assert_eq!(AngleHelper::wrap_to_180(180.0), 180.0);
        assert_eq!(AngleHelper::wrap_to_180(-180.0), 180.0);
        assert_eq!(AngleHelper::wrap_to_180(190.0), -170.0);
        assert_eq!(AngleHelper::wrap_to_180(-190.0), 170.0);
        assert_eq!(AngleHelper::wrap_to_180(720.0 + 45.0), 45.0);
        assert_eq!(AngleHelper::wrap_to_180(0.0), 0.0);
    }

    #[test]
    fn wrap_to_360_is_half_open() {
        assert_eq!(AngleHelper::wrap_to_360(360.0), 0.0);
        assert_eq!(AngleHelper::wrap_to_360(-90.0), 270.0);
        assert_eq!(AngleHelper::wrap_to_360(450.0), 90.0);
        assert_eq!(AngleHelper::wrap_to_360(-720.0), 0.0);
        let tiny = AngleHelper::wrap_to_360(-1e-20);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn wrap_radians_stays_in_range() {
        assert!((AngleHelper::wrap_radians(3.0 * PI / 2.0) + PI / 2.0).abs() < EPS);
        assert!((AngleHelper::wrap_radians(-3.0 * PI / 2.0) - PI / 2.0).abs() < EPS);
        assert_eq!(AngleHelper::wrap_radians(PI), PI);
        assert_eq!(AngleHelper::wrap_radians(-PI), -PI);
        let far = AngleHelper::wrap_radians(101.0 * PI / 4.0);
        assert!((-PI..=PI).contains(&far));
        assert!((far - (-3.0 * PI / 4.0)).abs() < 1e-9);
    }

    #[test]
    fn compass_headings_map_to_math_angles() {
        assert!((AngleHelper::heading_to_math_angle(0.0) - PI / 2.0).abs() < EPS);
        assert!(AngleHelper::heading_to_math_angle(90.0).abs() < EPS);
        assert!((AngleHelper::heading_to_math_angle(180.0) + PI / 2.0).abs() < EPS);
        assert!((AngleHelper::heading_to_math_angle(270.0).abs() - PI).abs() < EPS);
    }

    #[test]
    fn non_finite_input_passes_through() {
        assert!(AngleHelper::wrap_to_180(f64::NAN).is_nan());
        assert_eq!(AngleHelper::wrap_to_360(f64::INFINITY), f64::INFINITY);
        assert!(AngleHelper::wrap_radians(f64::NAN).is_nan());
    }
}
