//! End-to-end lifecycle of pooled bounds outlines
//!
//! Drives [`BoundsDebugSystem`] the way a host frame loop would and checks
//! what ends up in the line registry.

use std::rc::Rc;

use approx::assert_relative_eq;

use crate::config::BoundsDebugConfig;
use crate::debug::{BoundsDebugSystem, VisualState};
use crate::foundation::logging;
use crate::foundation::math::{Quat, SharedTransform, Transform, Vec3};
use crate::geometry::{BoxCollider, OUTLINE_SEGMENT_COUNT};
use crate::render::{LineRegistry, RendererCell, SharedRenderer};

fn shared_registry() -> SharedRenderer<LineRegistry> {
    RendererCell::shared(LineRegistry::new())
}

fn system_with(
    config: BoundsDebugConfig,
) -> (SharedRenderer<LineRegistry>, BoundsDebugSystem<LineRegistry>) {
    logging::init_for_tests();
    let renderer = shared_registry();
    let system = BoundsDebugSystem::with_shared_renderer(config, renderer.clone()).unwrap();
    (renderer, system)
}

fn crate_transform() -> SharedTransform {
    Transform::from_position(Vec3::new(3.0, 0.0, -2.0)).into_shared()
}

#[test]
fn test_outline_visible_for_exactly_ten_frames() {
    let (renderer, mut system) = system_with(BoundsDebugConfig::default());
    let transform = crate_transform();
    let handle = system
        .show_bounds(&transform, BoxCollider::from_size(Vec3::new(2.0, 2.0, 2.0)), None)
        .unwrap();

    for frame in 1..10 {
        assert_eq!(system.update(), 0, "expired early on frame {frame}");
        assert!(system.is_showing(handle));
        assert_eq!(renderer.borrow().world_segments().len(), OUTLINE_SEGMENT_COUNT);
    }

    assert_eq!(system.update(), 1);
    assert!(!system.is_showing(handle));
    assert!(renderer.borrow().world_segments().is_empty());
    assert_eq!(system.stats().expired, 1);
}

#[test]
fn test_early_release_stops_drawing_immediately() {
    let (renderer, mut system) = system_with(BoundsDebugConfig::default());
    let transform = crate_transform();
    let handle = system
        .show_bounds(&transform, BoxCollider::from_size(Vec3::new(1.0, 1.0, 1.0)), None)
        .unwrap();

    for _ in 0..4 {
        system.update();
    }
    assert_eq!(system.visual(handle).unwrap().state(), VisualState::Active(6));

    system.release(handle).unwrap();
    assert_eq!(system.active_count(), 0);
    assert_eq!(renderer.borrow().visible_count(), 0);

    // Nothing further expires from the released outline
    for _ in 0..10 {
        assert_eq!(system.update(), 0);
    }
    assert_eq!(system.stats().expired, 0);
    assert_eq!(system.stats().released_early, 1);
}

#[test]
fn test_outline_follows_transform_rotation() {
    let (renderer, mut system) = system_with(BoundsDebugConfig::default());
    let transform = Transform::from_position_rotation(
        Vec3::new(0.0, 0.0, 0.0),
        Quat::from_axis_angle(&Vec3::z_axis(), std::f32::consts::FRAC_PI_2),
    )
    .into_shared();
    system
        .show_bounds(&transform, BoxCollider::from_size(Vec3::new(2.0, 2.0, 2.0)), None)
        .unwrap();

    // Local (-1, -1, 1) rotated a quarter turn about Z, applied once
    let first = renderer.borrow().world_segments()[0];
    assert_relative_eq!(first.start, Vec3::new(1.0, -1.0, 1.0), epsilon = 1e-5);

    transform.borrow_mut().position = Vec3::new(0.0, 10.0, 0.0);
    let moved = renderer.borrow().world_segments()[0];
    assert_relative_eq!(moved.start, Vec3::new(1.0, 9.0, 1.0), epsilon = 1e-5);
}

#[test]
fn test_reused_slot_outlines_new_target() {
    let config = BoundsDebugConfig::default().with_pool_capacity(1).with_frame_count(2);
    let (renderer, mut system) = system_with(config);

    let first_target = crate_transform();
    let first = system
        .show_bounds(&first_target, BoxCollider::from_size(Vec3::new(2.0, 2.0, 2.0)), None)
        .unwrap();
    system.update();
    system.update();
    assert!(!system.is_showing(first));

    let second_target = Transform::identity().into_shared();
    let second = system
        .show_bounds(&second_target, BoxCollider::from_size(Vec3::new(6.0, 6.0, 6.0)), None)
        .unwrap();

    assert_eq!(first.index, second.index);
    let visual = system.visual(second).unwrap();
    assert_eq!(visual.state(), VisualState::Active(2));
    assert!(Rc::ptr_eq(visual.target().unwrap(), &second_target));
    assert_eq!(visual.outline().unwrap().get(0), Some(Vec3::new(-3.0, -3.0, 3.0)));

    let registry = renderer.borrow();
    assert_eq!(registry.live_count(), 1);
    assert_eq!(registry.created_count(), 2);
}

#[test]
fn test_no_line_sets_leak_when_system_is_dropped() {
    let (renderer, mut system) = system_with(BoundsDebugConfig::default());
    let transform = crate_transform();

    for _ in 0..5 {
        system
            .show_bounds(&transform, BoxCollider::from_size(Vec3::new(1.0, 2.0, 3.0)), None)
            .unwrap();
    }
    system.update();
    drop(system);

    let registry = renderer.borrow();
    assert_eq!(registry.created_count(), 5);
    assert_eq!(registry.destroyed_count(), 5);
    assert_eq!(registry.live_count(), 0);
}

#[test]
fn test_peak_active_tracks_high_water_mark() {
    let (_renderer, mut system) = system_with(BoundsDebugConfig::default().with_frame_count(1));
    let transform = crate_transform();
    let collider = BoxCollider::from_size(Vec3::new(1.0, 1.0, 1.0));

    for _ in 0..3 {
        system.show_bounds(&transform, collider, None).unwrap();
    }
    assert_eq!(system.update(), 3);
    system.show_bounds(&transform, collider, None).unwrap();

    let stats = system.stats();
    assert_eq!(stats.spawned, 4);
    assert_eq!(stats.peak_active, 3);
    assert_eq!(system.active_count(), 1);
}

#[test]
fn test_expiry_while_host_reads_renderer() {
    let (renderer, mut system) = system_with(BoundsDebugConfig::default().with_frame_count(1));
    let transform = crate_transform();
    system
        .show_bounds(&transform, BoxCollider::from_size(Vec3::new(1.0, 1.0, 1.0)), None)
        .unwrap();

    {
        let reader = renderer.borrow();
        assert_eq!(system.update(), 1);
        assert_eq!(reader.visible_count(), 1);
        assert_eq!(renderer.pending_count(), 1);
    }

    assert_eq!(renderer.borrow().visible_count(), 0);

    // Line sets dropped during a read are freed once the read ends
    {
        let _reader = renderer.borrow();
        drop(system);
    }
    let registry = renderer.borrow();
    assert_eq!(registry.destroyed_count(), 1);
    assert_eq!(registry.live_count(), 0);
}
