use proptest::prelude::*;

use crate::commands::PlayerCommand;
use crate::constants::*;
use crate::enums::*;
use crate::events::AudioEvent;
use crate::geometry::{distance, lerp, lerp_point, Point};
use crate::state::GameStateSnapshot;
use crate::types::{SimTime, Viewport};

// ---- Geometry ----

#[test]
fn test_distance_3_4_5() {
    let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
    assert!((d - 5.0).abs() < 1e-12);
}

#[test]
fn test_lerp_endpoints_and_midpoint() {
    assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
    assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
    assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
}

#[test]
fn test_lerp_point_is_unclamped() {
    let p = lerp_point(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.5);
    assert_eq!(p, Point::new(15.0, 0.0));
}

proptest! {
    #[test]
    fn prop_lerp_point_stays_on_segment(
        ax in -1000.0f64..1000.0, ay in -1000.0f64..1000.0,
        bx in -1000.0f64..1000.0, by in -1000.0f64..1000.0,
        t in 0.0f64..=1.0,
    ) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        let p = lerp_point(a, b, t);
        let total = distance(a, b);
        // Distances to both ends add up to the segment length.
        prop_assert!((distance(a, p) + distance(p, b) - total).abs() < 1e-6);
    }
}

// ---- Session state machine ----

#[test]
fn test_session_transitions_allowed() {
    use SessionState::*;
    assert!(Menu.can_transition(Playing));
    assert!(Playing.can_transition(GameOver));
    assert!(Playing.can_transition(Victory));
    assert!(GameOver.can_transition(Playing));
    assert!(Victory.can_transition(Playing));
    assert!(Menu.can_transition(Menu));
}

#[test]
fn test_session_transitions_rejected() {
    use SessionState::*;
    assert!(!Menu.can_transition(GameOver));
    assert!(!Menu.can_transition(Victory));
    assert!(!GameOver.can_transition(Victory));
    assert!(!Victory.can_transition(GameOver));
    assert!(!GameOver.can_transition(Menu));
    assert!(!Victory.can_transition(Menu));
    assert!(!Playing.can_transition(Menu));
    assert!(!Playing.can_transition(Playing));
}

#[test]
fn test_terminal_states() {
    assert!(SessionState::GameOver.is_terminal());
    assert!(SessionState::Victory.is_terminal());
    assert!(!SessionState::Menu.is_terminal());
    assert!(!SessionState::Playing.is_terminal());
}

#[test]
fn test_growth_direction_sign() {
    assert_eq!(GrowthDirection::Expanding.sign(), 1.0);
    assert_eq!(GrowthDirection::Contracting.sign(), -1.0);
}

// ---- Batteries ----

#[test]
fn test_center_battery_has_double_ammo() {
    assert_eq!(BatterySlot::Left.max_ammo(), FLANK_BATTERY_AMMO);
    assert_eq!(BatterySlot::Right.max_ammo(), FLANK_BATTERY_AMMO);
    assert_eq!(
        BatterySlot::Center.max_ammo(),
        2 * BatterySlot::Left.max_ammo()
    );
}

#[test]
fn test_battery_slot_order() {
    assert!(BatterySlot::Left < BatterySlot::Center);
    assert!(BatterySlot::Center < BatterySlot::Right);
    assert_eq!(BatterySlot::Center.x_fraction(), 0.5);
}

// ---- Types ----

#[test]
fn test_viewport_usable() {
    assert!(Viewport::new(800.0, 600.0).is_usable());
    assert!(!Viewport::new(0.0, 600.0).is_usable());
    assert!(!Viewport::new(800.0, -1.0).is_usable());
    assert!(!Viewport::new(f64::NAN, 600.0).is_usable());
}

#[test]
fn test_viewport_ground_line() {
    let vp = Viewport::new(800.0, 600.0);
    assert_eq!(vp.ground_y(), 600.0 - GROUND_MARGIN);
    assert_eq!(Viewport::new(800.0, 10.0).ground_y(), 0.0);
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    time.advance(16.0);
    time.advance(17.0);
    assert_eq!(time.frame, 2);
    assert_eq!(time.elapsed_ms, 33.0);
}

// ---- Wire shapes ----

#[test]
fn test_player_command_tagged() {
    let json = serde_json::to_string(&PlayerCommand::Fire { x: 1.0, y: 2.0 }).unwrap();
    assert_eq!(json, r#"{"type":"Fire","x":1.0,"y":2.0}"#);

    let back: PlayerCommand = serde_json::from_str(r#"{"type":"Restart"}"#).unwrap();
    assert_eq!(back, PlayerCommand::Restart);
}

#[test]
fn test_audio_event_tagged() {
    let event = AudioEvent::ImpactDamage {
        position: Point::new(5.0, 6.0),
    };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["type"], "ImpactDamage");
}

#[test]
fn test_default_snapshot_serializes() {
    let snapshot = GameStateSnapshot::default();
    assert_eq!(snapshot.state, SessionState::Menu);
    assert_eq!(snapshot.live_batteries(), 0);
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"Menu\""));
}
