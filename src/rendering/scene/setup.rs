use bevy::prelude::*;
use bevy::render::camera::PerspectiveProjection;

use super::scene::SPHERE_SEGMENTS;
use crate::core::components::Body;
use crate::rendering::palette::color_from_hex;
use crate::simulation::AnimationLoop;

/// Spawns camera, lights and the body from the loop's scene description.
pub struct SceneSetupPlugin;

impl Plugin for SceneSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene);
    }
}

fn setup_scene(
    mut commands: Commands,
    anim: Res<AnimationLoop>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let scene = anim.scene();
    let rig = anim.camera();

    commands.insert_resource(ClearColor(color_from_hex(scene.background)));
    commands.insert_resource(AmbientLight {
        color: color_from_hex(scene.ambient_light.color),
        brightness: scene.ambient_light.brightness,
        ..default()
    });

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: rig.fov_y_degrees.to_radians(),
            aspect_ratio: rig.aspect,
            near: rig.near,
            far: rig.far,
        }),
        Transform::from_translation(rig.position).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let light = scene.point_light;
    commands.spawn((
        PointLight {
            color: color_from_hex(light.color),
            intensity: light.intensity,
            range: light.range,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(light.position),
    ));

    let body = scene.body;
    let mesh = meshes.add(Sphere::new(body.radius).mesh().uv(SPHERE_SEGMENTS, SPHERE_SEGMENTS));
    let material = materials.add(StandardMaterial {
        base_color: color_from_hex(body.color),
        perceptual_roughness: 0.35,
        ..default()
    });
    commands.spawn((
        Name::new("Body"),
        Body,
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_translation(body.position),
    ));

    info!(
        target: "scene",
        radius = body.radius,
        color = %format!("#{:06x}", body.color),
        "Scene ready: viewport {}x{}",
        anim.viewport().width,
        anim.viewport().height
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::AnimationLoopPlugin;

    fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .add_plugins((AnimationLoopPlugin, SceneSetupPlugin));
        app
    }

    #[test]
    fn body_spawned_and_stepped_once() {
        let mut app = headless_app();
        app.update();

        let world = app.world_mut();
        let (transform, material) = world
            .query_filtered::<(&Transform, &MeshMaterial3d<StandardMaterial>), With<Body>>()
            .single(world)
            .expect("exactly one body");
        assert_eq!(transform.translation, Vec3::new(5.0, 5.0, 0.0));
        let id = material.id();
        let materials = world.resource::<Assets<StandardMaterial>>();
        let mat = materials.get(id).expect("body material");
        assert_eq!(mat.base_color, color_from_hex(0xff0000));
    }

    #[test]
    fn camera_and_lights_spawned() {
        let mut app = headless_app();
        app.update();

        let world = app.world_mut();
        let cameras = world.query::<(&Camera3d, &Projection)>().iter(world).count();
        assert_eq!(cameras, 1);
        let lights: Vec<PointLight> = world.query::<&PointLight>().iter(world).cloned().collect();
        assert_eq!(lights.len(), 1);
        assert!(lights[0].shadows_enabled);
        assert_eq!(world.resource::<ClearColor>().0, color_from_hex(0x4a4a3a));
        assert_eq!(world.resource::<AmbientLight>().color, color_from_hex(0x404040));
    }
}
