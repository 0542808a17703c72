//! Orbit camera
//!
//! The camera circles the board centre at a fixed radius. Each key press
//! moves it one step:
//!
//! - **A** / **D**: rotate the orbit angle down / up
//! - **W**: raise the camera
//! - **S**: lower the camera, only while it is above the minimum height
//!
//! The position is recomputed from angle and height after every step and
//! the camera always looks at the board centre.

use crate::core::{AppConfig, CameraConfig};
use bevy::prelude::*;
use chess_rules::BOARD_SIZE;

/// World-space centre of the board on the `y = 0` plane
pub const BOARD_CENTER: Vec3 = Vec3::new(BOARD_SIZE as f32 / 2.0, 0.0, BOARD_SIZE as f32 / 2.0);

#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct OrbitCamera {
    /// Orbit angle in degrees, 0 points along +Z from the centre
    pub angle_deg: f32,
    pub height: f32,
    pub radius: f32,
}

impl OrbitCamera {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            angle_deg: config.initial_angle_deg,
            height: config.initial_height,
            radius: config.radius,
        }
    }

    pub fn position(&self) -> Vec3 {
        orbit_position(self.angle_deg, self.radius, self.height, BOARD_CENTER)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(BOARD_CENTER, Vec3::Y)
    }

    /// Apply one step of keyboard input; returns whether anything moved
    pub fn step(&mut self, config: &CameraConfig, left: bool, right: bool, up: bool, down: bool) -> bool {
        let before = *self;
        if left {
            self.angle_deg -= config.rotate_step_deg;
        }
        if right {
            self.angle_deg += config.rotate_step_deg;
        }
        if up {
            self.height += config.height_step;
        }
        if down && self.height > config.min_height {
            self.height -= config.height_step;
        }
        *self != before
    }
}

/// Point on the orbit circle around `center` at `angle_deg`
pub fn orbit_position(angle_deg: f32, radius: f32, height: f32, center: Vec3) -> Vec3 {
    let theta = angle_deg.to_radians();
    Vec3::new(
        center.x + radius * theta.sin(),
        height,
        center.z + radius * theta.cos(),
    )
}

pub fn orbit_camera_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<AppConfig>,
    mut query: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    let left = keyboard.just_pressed(KeyCode::KeyA);
    let right = keyboard.just_pressed(KeyCode::KeyD);
    let up = keyboard.just_pressed(KeyCode::KeyW);
    let down = keyboard.just_pressed(KeyCode::KeyS);
    if !(left || right || up || down) {
        return;
    }

    for (mut transform, mut orbit) in query.iter_mut() {
        if orbit.step(&config.camera, left, right, up, down) {
            *transform = orbit.transform();
            debug!(
                "[CAMERA] angle {:.1} deg, height {:.1}",
                orbit.angle_deg, orbit.height
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn test_orbit_position_cardinal_angles() {
        let c = BOARD_CENTER;
        assert!(approx(orbit_position(0.0, 15.0, 10.0, c), Vec3::new(4.0, 10.0, 19.0)));
        assert!(approx(orbit_position(90.0, 15.0, 10.0, c), Vec3::new(19.0, 10.0, 4.0)));
        assert!(approx(orbit_position(180.0, 15.0, 2.0, c), Vec3::new(4.0, 2.0, -11.0)));
    }

    #[test]
    fn test_orbit_keeps_radius() {
        for angle in [0.0, 33.0, 45.0, 200.0, -75.0] {
            let p = orbit_position(angle, 15.0, 7.0, BOARD_CENTER);
            let horizontal = Vec2::new(p.x - 4.0, p.z - 4.0).length();
            assert!((horizontal - 15.0).abs() < 1e-4);
            assert_eq!(p.y, 7.0);
        }
    }

    #[test]
    fn test_rotate_steps() {
        let config = CameraConfig::default();
        let mut orbit = OrbitCamera::from_config(&config);
        assert!(orbit.step(&config, true, false, false, false));
        assert_eq!(orbit.angle_deg, 42.0);
        orbit.step(&config, false, true, false, false);
        orbit.step(&config, false, true, false, false);
        assert_eq!(orbit.angle_deg, 48.0);
    }

    #[test]
    fn test_height_has_floor() {
        let config = CameraConfig::default();
        let mut orbit = OrbitCamera::from_config(&config);
        orbit.height = 4.5;

        assert!(orbit.step(&config, false, false, false, true));
        assert_eq!(orbit.height, 3.0);

        // Exactly at the minimum: S no longer lowers
        assert!(!orbit.step(&config, false, false, false, true));
        assert_eq!(orbit.height, 3.0);

        assert!(orbit.step(&config, false, false, true, false));
        assert_eq!(orbit.height, 4.5);
    }

    #[test]
    fn test_default_camera_starts_on_orbit() {
        //! The first frame is already on the orbit, so the first key press
        //! turns by one step instead of jumping

        let config = CameraConfig::default();
        let start = OrbitCamera::from_config(&config).position();
        assert!(approx(start, orbit_position(45.0, 15.0, 15.0, BOARD_CENTER)));

        let mut turned = OrbitCamera::from_config(&config);
        turned.step(&config, false, true, false, false);
        let moved = start.distance(turned.position());
        assert!(moved < 1.0, "one step moved the camera {moved}");
    }

    #[test]
    fn test_transform_looks_at_center() {
        let orbit = OrbitCamera::from_config(&CameraConfig::default());
        let transform = orbit.transform();
        let to_center = (BOARD_CENTER - transform.translation).normalize();
        assert!(transform.forward().dot(to_center) > 0.9999);
    }
}
