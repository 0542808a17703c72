//! Camera, lighting and background

use crate::core::AppConfig;
use crate::game::OrbitCamera;
use bevy::prelude::*;

pub const CLEAR_COLOR: Color = Color::srgb(0.4, 0.4, 0.8);
pub const LIGHT_POSITION: Vec3 = Vec3::new(10.0, 15.0, 10.0);

pub fn setup_scene(mut commands: Commands, config: Res<AppConfig>) {
    let orbit = OrbitCamera::from_config(&config.camera);

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 45.0_f32.to_radians(),
            near: 1.0,
            far: 100.0,
            ..default()
        }),
        orbit.transform(),
        orbit,
        Name::new("Orbit Camera"),
    ));

    commands.spawn((
        PointLight {
            intensity: 4_000_000.0,
            range: 60.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(LIGHT_POSITION),
        Name::new("Board Light"),
    ));

    info!(
        "[RENDER] Scene ready, camera at {:.1?}",
        orbit.position()
    );
}
