//! Headless bounds outline demo
//!
//! Spawns a few spinning crates, outlines each for a handful of frames and
//! reports what the line registry would draw. Pass a `.toml` or `.ron`
//! config path as the first argument to override the defaults.
//!
//! Run with `RUST_LOG=debug` to follow every activation and expiry.

use bounds_debug::foundation::logging;
use bounds_debug::foundation::math::utils::deg_to_rad;
use bounds_debug::geometry::world_outline;
use bounds_debug::prelude::*;
use rand::prelude::*;

// Configuration constants
const CRATE_COUNT: usize = 4;
const FRAME_COUNT: u32 = 30;
const SPIN_DEGREES_PER_FRAME: f32 = 6.0;

struct SpinningCrate {
    transform: SharedTransform,
    collider: BoxCollider,
    color: Vec4,
    outline: Option<PoolHandle>,
}

fn load_config() -> Result<BoundsDebugConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading bounds config from {}", path);
            BoundsDebugConfig::load_from_file(&path)
        }
        None => Ok(BoundsDebugConfig::default()),
    }
}

fn spawn_crates(rng: &mut impl Rng) -> Vec<SpinningCrate> {
    (0..CRATE_COUNT)
        .map(|i| {
            let position = Vec3::new(i as f32 * 4.0, rng.gen_range(-1.0..1.0), 0.0);
            let size = Vec3::new(
                rng.gen_range(0.5..3.0),
                rng.gen_range(0.5..3.0),
                rng.gen_range(0.5..3.0),
            );
            SpinningCrate {
                transform: Transform::from_position(position).into_shared(),
                collider: BoxCollider::new(Vec3::zeros(), size),
                color: Vec4::new(rng.gen(), rng.gen(), rng.gen(), 1.0),
                outline: None,
            }
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = load_config()?;
    let mut system = BoundsDebugSystem::new(config, LineRegistry::new())?;
    let mut rng = thread_rng();
    let mut crates = spawn_crates(&mut rng);
    let spin = Quat::from_axis_angle(&Vec3::y_axis(), deg_to_rad(SPIN_DEGREES_PER_FRAME));

    for frame in 0..FRAME_COUNT {
        for (i, spinning) in crates.iter_mut().enumerate() {
            {
                let mut transform = spinning.transform.borrow_mut();
                transform.rotation = spin * transform.rotation;
            }

            // Re-outline a crate once its previous outline has expired
            let showing = spinning.outline.is_some_and(|handle| system.is_showing(handle));
            if !showing && rng.gen_bool(0.25) {
                match system.show_bounds(&spinning.transform, spinning.collider, Some(spinning.color)) {
                    Ok(handle) => {
                        log::info!("Frame {}: outlining crate {}", frame, i);
                        if let Some(outline) = system.visual(handle).and_then(BoundsVisual::outline) {
                            let world = world_outline(outline, &spinning.transform.borrow());
                            log::debug!("Crate {} outline starts at {:?}", i, world[0]);
                        }
                        spinning.outline = Some(handle);
                    }
                    Err(e) => log::warn!("Frame {}: crate {} not outlined: {}", frame, i, e),
                }
            }
        }

        // The last crate's outline is cut short halfway through the run
        if frame == FRAME_COUNT / 2 {
            if let Some(handle) = crates.last().and_then(|c| c.outline) {
                if system.release(handle).is_ok() {
                    log::info!("Frame {}: released last crate's outline early", frame);
                }
            }
        }

        let drawn = system.renderer().world_segments().len();
        let expired = system.update();
        log::info!(
            "Frame {}: {} segments drawn, {} outlines active, {} expired",
            frame,
            drawn,
            system.active_count(),
            expired
        );
    }

    let stats = system.stats();
    log::info!(
        "Done: {} shown, {} expired, {} released early, peak {} at once",
        stats.spawned,
        stats.expired,
        stats.released_early,
        stats.peak_active
    );

    Ok(())
}
