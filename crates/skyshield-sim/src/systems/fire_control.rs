//! Fire control: nearest-battery dispatch for a player-designated point.

use hecs::{Entity, World};
use tracing::trace;

use skyshield_core::components::Battery;
use skyshield_core::enums::BatterySlot;
use skyshield_core::geometry::{distance, Point};

use crate::session::IdAllocator;
use crate::world_setup;

/// Pick the live battery with ammo closest to `target`.
///
/// Candidates are visited in slot order (left, center, right) and only a
/// strictly closer battery replaces the current pick, so ties go to the
/// first slot.
pub fn select_battery(world: &World, target: Point) -> Option<Entity> {
    let mut candidates: Vec<(Entity, BatterySlot, Point)> = world
        .query::<&Battery>()
        .iter()
        .filter(|(_, battery)| battery.alive && battery.ammo > 0)
        .map(|(entity, battery)| (entity, battery.slot, battery.position))
        .collect();
    candidates.sort_by_key(|(_, slot, _)| *slot);

    let mut best: Option<(Entity, f64)> = None;
    for (entity, _, position) in candidates {
        let range = distance(position, target);
        if best.map_or(true, |(_, best_range)| range < best_range) {
            best = Some((entity, range));
        }
    }
    best.map(|(entity, _)| entity)
}

/// Fire one missile at `target` from the selected battery.
///
/// Returns the spawned missile, or `None` when no battery is eligible
/// (nothing changes in that case).
pub fn fire(world: &mut World, ids: &mut IdAllocator, target: Point) -> Option<Entity> {
    let battery_entity = select_battery(world, target)?;

    let origin = {
        let mut battery = world.get::<&mut Battery>(battery_entity).ok()?;
        battery.ammo -= 1;
        trace!(slot = ?battery.slot, ammo = battery.ammo, "missile away");
        battery.position
    };

    Some(world_setup::spawn_missile(world, ids, origin, target))
}
