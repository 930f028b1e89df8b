/// Pose of the sensor at one synthetic sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPose {
    pub x: f64,
    pub y: f64,
    /// Compass heading in degrees.
    pub heading: f64,
}

/// Samples a track every `spacing` units for `length` units.
///
/// `turn_rate` is in degrees per unit travelled, positive to starboard.
/// Zero gives a straight line.
pub fn sampled_track(
    start_x: f64,
    start_y: f64,
    heading: f64,
    length: f64,
    spacing: f64,
    turn_rate: f64,
) -> Vec<TrackPose> {
    if spacing <= 0.0 || length < 0.0 {
        return Vec::new();
    }

    let steps = (length / spacing).floor() as usize;
    let mut poses = Vec::with_capacity(steps + 1);
    let mut pose = TrackPose {
        x: start_x,
        y: start_y,
        heading,
    };
    poses.push(pose);

    for _ in 0..steps {
        let rad = pose.heading.to_radians();
        pose.x += rad.sin() * spacing;
        pose.y += rad.cos() * spacing;
        pose.heading = (pose.heading + turn_rate * spacing).rem_euclid(360.0);
        poses.push(pose);
    }
    poses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_track_heads_north() {
        let poses = sampled_track(0.0, 0.0, 0.0, 10.0, 2.5, 0.0);
        assert_eq!(poses.len(), 5);
        let last = poses.last().unwrap();
        assert!(last.x.abs() < 1e-9);
        assert!((last.y - 10.0).abs() < 1e-9);
        assert!(poses.iter().all(|p| p.heading == 0.0));
    }

    #[test]
    fn turning_track_accumulates_heading() {
        let poses = sampled_track(0.0, 0.0, 90.0, 10.0, 1.0, 2.0);
        assert_eq!(poses.len(), 11);
        assert!((poses[10].heading - 110.0).abs() < 1e-9);
        assert!(poses[1].x > 0.0);
    }

    #[test]
    fn degenerate_spacing_yields_nothing() {
        assert!(sampled_track(0.0, 0.0, 0.0, 10.0, 0.0, 0.0).is_empty());
    }
}
