/// Calibration and policy values for the impact model.
///
/// These are empirical engineering approximations, not physical constants.
/// Keep them separate from runtime/server configuration so recalibration
/// never touches control flow.

/// Mean NEO encounter speed assumed when no provider reports one (km/s).
pub const DEFAULT_VELOCITY_KMS: f64 = 19.0;

/// Impact angle assumed when the request does not supply one (degrees).
pub const DEFAULT_IMPACT_ANGLE_DEG: f64 = 45.0;

/// Leading coefficient of the crater diameter law (meters at 1 Mt).
pub const CRATER_DIAMETER_COEFF_M: f64 = 600.0;

/// Energy exponent of the crater diameter law.
pub const CRATER_ENERGY_EXPONENT: f64 = 0.3;

/// Overpressure ring coefficients (meters at 1 kt yield, cube-root scaled).
pub const RING_COEFF_10PSI_M: f64 = 1100.0;
pub const RING_COEFF_5PSI_M: f64 = 1800.0;
pub const RING_COEFF_3PSI_M: f64 = 2700.0;
pub const RING_COEFF_1PSI_M: f64 = 4700.0;

/// Speed of sound driving the shockwave animation track (km/s).
pub const SOUND_SPEED_KMS: f64 = 0.343;

/// Time constant of the crater growth saturation curve (seconds).
pub const CRATER_GROWTH_TAU_S: f64 = 8.0;

/// Last second of the animation time series (samples run 0..=this).
pub const TIME_SERIES_SECONDS: u32 = 90;

/// Vertex count for projected circle polygons.
pub const CIRCLE_STEPS: usize = 128;
