//! End-of-step checks: defeat and level progression.

use hecs::World;

use skyshield_core::components::Battery;

/// True when no battery is left standing.
pub fn all_batteries_destroyed(world: &World) -> bool {
    world.query::<&Battery>().iter().all(|(_, battery)| !battery.alive)
}
