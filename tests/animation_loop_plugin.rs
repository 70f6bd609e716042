use bevy::ecs::event::Events;
use bevy::prelude::*;

use chroma_bounce::core::system::{FrameStepSet, PostFrameSet};
use chroma_bounce::rendering::palette::color_from_hex;
use chroma_bounce::simulation::Wall;
use chroma_bounce::{AnimationLoop, AnimationLoopPlugin, Body, WallContact};

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .configure_sets(Update, (FrameStepSet, PostFrameSet.after(FrameStepSet)))
        .add_plugins(AnimationLoopPlugin);
    app
}

fn body_translation(app: &mut App) -> Vec3 {
    let mut q = app.world_mut().query_filtered::<&Transform, With<Body>>();
    q.single(app.world()).expect("single body").translation
}

#[test]
fn transform_follows_loop_state() {
    let mut app = headless_app();
    app.world_mut().spawn((Body, Transform::default()));

    for _ in 0..10 {
        app.update();
    }
    assert_eq!(body_translation(&mut app), Vec3::new(50.0, 50.0, 0.0));

    for _ in 10..37 {
        app.update();
    }
    let anim = app.world().resource::<AnimationLoop>();
    assert_eq!(anim.frame_count(), 37);
    assert_eq!(anim.state().color_index(), 1);
    assert_eq!(anim.state().velocity.y, -5.0);
    assert_eq!(body_translation(&mut app), Vec3::new(185.0, 180.0, 0.0));
}

#[test]
fn loop_idles_without_a_body() {
    let mut app = headless_app();
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(app.world().resource::<AnimationLoop>().frame_count(), 0);
}

#[test]
fn contacts_are_forwarded_as_events() {
    let mut app = headless_app();
    app.world_mut().spawn((Body, Transform::default()));

    let mut seen = Vec::new();
    for _ in 0..110 {
        app.update();
        let mut events = app.world_mut().resource_mut::<Events<WallContact>>();
        seen.extend(events.drain());
    }
    let walls: Vec<(u64, Wall, usize)> =
        seen.iter().map(|c| (c.frame, c.wall, c.color_index)).collect();
    assert_eq!(
        walls,
        vec![(37, Wall::Top, 1), (77, Wall::Right, 2), (110, Wall::Bottom, 3)]
    );
}

#[test]
fn material_color_changes_on_contact() {
    let mut app = headless_app();
    app.init_resource::<Assets<StandardMaterial>>();
    let handle = app
        .world_mut()
        .resource_mut::<Assets<StandardMaterial>>()
        .add(StandardMaterial {
            base_color: color_from_hex(0xff0000),
            ..default()
        });
    app.world_mut()
        .spawn((Body, Transform::default(), MeshMaterial3d(handle.clone())));

    for _ in 0..36 {
        app.update();
    }
    let color = |app: &App| {
        app.world()
            .resource::<Assets<StandardMaterial>>()
            .get(&handle)
            .expect("material alive")
            .base_color
    };
    assert_eq!(color(&app), color_from_hex(0xff0000));

    app.update();
    assert_eq!(color(&app), color_from_hex(0xff3300));
}

#[test]
fn preinserted_loop_state_is_respected() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(AnimationLoop::default().with_position(Vec3::new(378.0, 178.0, 0.0)))
        .add_plugins(AnimationLoopPlugin);
    app.world_mut().spawn((Body, Transform::default()));

    app.update();
    let anim = app.world().resource::<AnimationLoop>();
    assert_eq!(anim.state().color_index(), 2);
    assert_eq!(anim.contact_count(), 2);
    assert_eq!(body_translation(&mut app), Vec3::new(380.0, 180.0, 0.0));
}
