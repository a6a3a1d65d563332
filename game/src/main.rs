// Distributed under the GNU Affero General Public License v3.0 or later.
// See https://www.gnu.org/licenses/agpl-3.0.html for details.

mod settings;

use engine::{
    BounceComponent, ColliderComponent, CollisionResource, Engine, PlayVolume, TimeResource,
    TransformComponent, VelocityComponent,
};
use glam::Vec3;
use settings::SimSettings;

fn main() {
    engine::init_logging();

    let settings = SimSettings::load_user_settings();
    log::info!(
        "TumbleBox starting: fixed step {}s, play volume {:?}",
        settings.physics.fixed_timestep,
        settings.volume.half_extents
    );

    let mut engine = build_engine(&settings);
    spawn_scene(&mut engine, &settings);

    engine.run_for(settings.scene.run_seconds);

    let collision = engine.world.resource::<CollisionResource>();
    let time = engine.world.resource::<TimeResource>();
    log::info!(
        "TumbleBox done: {} ticks over {:.2}s simulated, {} bounces",
        time.tick_count(),
        time.total_time(),
        collision.bounce_count
    );
}

fn build_engine(settings: &SimSettings) -> Engine {
    let mut engine = Engine::with_time(TimeResource::new(
        settings.physics.fixed_timestep,
        settings.physics.max_frame_time,
    ));
    engine
        .world
        .insert_resource(PlayVolume::new(Vec3::from_array(settings.volume.half_extents)));
    engine.world.resource_mut::<CollisionResource>().max_gjk_iterations =
        settings.physics.max_gjk_iterations;
    engine
}

fn spawn_scene(engine: &mut Engine, settings: &SimSettings) {
    let scene = &settings.scene;
    // The reference spin is one fixed increment per tick; as an angular
    // velocity that is increment / fixed step.
    let spin = Vec3::new(
        scene.spin_degrees_per_tick.to_radians(),
        scene.spin_degrees_per_tick.to_radians(),
        0.0,
    ) / settings.physics.fixed_timestep;

    // Anchor: large, stationary, spinning in place at the origin.
    engine.world.spawn((
        TransformComponent {
            scale: Vec3::splat(scene.anchor_scale),
            ..TransformComponent::default()
        },
        VelocityComponent {
            translational: Vec3::ZERO,
            angular: spin,
        },
        ColliderComponent::cube(scene.cube_half_extent),
    ));

    // Rover: small, launched along x, bounced off the anchor and the play
    // volume walls.
    engine.world.spawn((
        TransformComponent {
            position: Vec3::new(scene.rover_start_x, 0.0, 0.0),
            scale: Vec3::splat(scene.rover_scale),
            ..TransformComponent::default()
        },
        VelocityComponent {
            translational: Vec3::new(scene.rover_speed, 0.0, 0.0),
            angular: spin,
        },
        ColliderComponent::cube(scene.cube_half_extent),
        BounceComponent,
    ));
}
