//! Simulation constants and tuning parameters.

/// Frame duration the per-frame rates below are expressed against (ms).
/// Missiles, explosions and floating text scale by `delta_ms / FRAME_BASELINE_MS`.
pub const FRAME_BASELINE_MS: f64 = 16.0;

/// Largest frame delta the engine will simulate in one step (ms).
/// Longer host suspensions are clamped to this.
pub const DEFAULT_MAX_FRAME_DELTA_MS: f64 = 100.0;

// --- Viewport ---

pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;

/// Distance of the ground line above the bottom edge (px).
pub const GROUND_MARGIN: f64 = 40.0;

// --- Defenders ---

pub const CITY_COUNT: usize = 6;

/// City x positions as multiples of `width / 8`. Slot 4 is left for the center battery.
pub const CITY_SLOTS: [f64; CITY_COUNT] = [1.0, 2.0, 3.0, 5.0, 6.0, 7.0];

/// Battery x positions as fractions of the viewport width (left, center, right).
pub const BATTERY_X_FRACTIONS: [f64; 3] = [0.08, 0.5, 0.92];

pub const FLANK_BATTERY_AMMO: u32 = 40;
pub const CENTER_BATTERY_AMMO: u32 = 80;

// --- Rockets ---

/// Rocket speed range in progress units per millisecond, before level scaling.
pub const ROCKET_SPEED_MIN: f64 = 0.000_05;
pub const ROCKET_SPEED_MAX: f64 = 0.000_15;

/// Speed multiplier added per level: speed * (1 + ROCKET_LEVEL_SPEEDUP * level).
pub const ROCKET_LEVEL_SPEEDUP: f64 = 0.1;

/// Radius added to an explosion's radius when testing rocket contact (px).
pub const ROCKET_COLLISION_RADIUS: f64 = 10.0;

/// Progress assigned to a rocket destroyed by a blast.
pub const ROCKET_DESTROYED_PROGRESS: f64 = 2.0;

/// Rockets at or beyond this progress are purged after collision handling.
pub const ROCKET_REMOVAL_PROGRESS: f64 = 1.5;

// --- Spawning ---

pub const SPAWN_INTERVAL_BASE_MS: f64 = 2000.0;
pub const SPAWN_INTERVAL_STEP_MS: f64 = 100.0;
pub const SPAWN_INTERVAL_FLOOR_MS: f64 = 500.0;

// --- Missiles ---

/// Interceptor speed in progress units per baseline frame.
pub const MISSILE_SPEED: f64 = 0.02;

// --- Explosions ---

pub const EXPLOSION_INITIAL_RADIUS: f64 = 2.0;
pub const EXPLOSION_MAX_RADIUS: f64 = 50.0;

/// Radius change per baseline frame, both growing and shrinking (px).
pub const EXPLOSION_GROWTH_RATE: f64 = 1.5;

/// Max radius of a chained explosion relative to a standard one.
pub const CHAIN_EXPLOSION_FACTOR: f64 = 0.8;

// --- Scoring ---

pub const POINTS_PER_INTERCEPT: u32 = 20;
pub const VICTORY_SCORE: u32 = 1000;
pub const POINTS_PER_LEVEL: u32 = 200;

// --- Floating text ---

pub const FLOATING_TEXT_LIFE_MS: f64 = 1000.0;

/// Upward drift per baseline frame (px).
pub const FLOATING_TEXT_DRIFT: f64 = 0.5;

pub const FLOATING_TEXT_CONTENT: &str = "+20";
