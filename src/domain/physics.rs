use serde::Serialize;
use std::f64::consts::PI;

use crate::domain::tuning;

// Pure impact physics: deterministic, no I/O. The crater and blast formulas
// are simplified engineering approximations calibrated in `domain::tuning`.

// Spherical-impactor mass from diameter and bulk density.
pub fn mass_kg(diameter_m: f64, density_kg_m3: f64) -> f64 {
    let radius_m = diameter_m / 2.0;
    let volume_m3 = (4.0 / 3.0) * PI * radius_m.powi(3);
    density_kg_m3 * volume_m3
}

pub fn energy_joules(mass_kg: f64, velocity_ms: f64) -> f64 {
    0.5 * mass_kg * velocity_ms.powi(2)
}

/// TNT-equivalent conversion: 1 Mt = 4.184e15 J.
pub fn energy_megatons(energy_joules: f64) -> f64 {
    energy_joules / 4.184e15
}

// Obliquity factor shared by the crater and blast laws. Shallower impacts
// couple less energy into the ground.
fn angle_factor(angle_deg: f64) -> f64 {
    angle_deg.to_radians().sin().cbrt()
}

// Final crater radius from a power-law diameter scaling of the TNT yield.
pub fn crater_radius_m(energy_mt: f64, angle_deg: f64) -> f64 {
    let diameter_m = tuning::CRATER_DIAMETER_COEFF_M
        * energy_mt.max(0.0).powf(tuning::CRATER_ENERGY_EXPONENT)
        * angle_factor(angle_deg);
    diameter_m / 2.0
}

/// Blast overpressure ring radii in meters, strongest ring innermost.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BlastRings {
    #[serde(rename = "10psi")]
    pub psi10: f64,
    #[serde(rename = "5psi")]
    pub psi5: f64,
    #[serde(rename = "3psi")]
    pub psi3: f64,
    #[serde(rename = "1psi")]
    pub psi1: f64,
}

impl BlastRings {
    // Label/radius pairs ordered from strongest overpressure outward.
    pub fn labeled(&self) -> [(&'static str, f64); 4] {
        [
            ("10psi", self.psi10),
            ("5psi", self.psi5),
            ("3psi", self.psi3),
            ("1psi", self.psi1),
        ]
    }
}

// Cube-root yield scaling of the four overpressure contours.
pub fn blast_rings_m(energy_mt: f64, angle_deg: f64) -> BlastRings {
    let yield_kt = energy_mt.max(0.0) * 1000.0;
    let scale = yield_kt.cbrt() * angle_factor(angle_deg);
    BlastRings {
        psi10: tuning::RING_COEFF_10PSI_M * scale,
        psi5: tuning::RING_COEFF_5PSI_M * scale,
        psi3: tuning::RING_COEFF_3PSI_M * scale,
        psi1: tuning::RING_COEFF_1PSI_M * scale,
    }
}

/// One animation frame of the expanding shockwave and growing crater.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimeSeriesSample {
    pub time_sec: u32,
    pub shockwave_radius_km: f64,
    pub crater_diameter_km: f64,
}

// Animation-only track, not a blast-wave model: the shockwave front expands
// at the speed of sound while the crater saturates exponentially toward its
// final diameter.
pub fn time_series(crater_radius_m: f64) -> Vec<TimeSeriesSample> {
    (0..=tuning::TIME_SERIES_SECONDS)
        .map(|time_sec| {
            let seconds = f64::from(time_sec);
            let crater_diameter_m = crater_radius_m
                * 2.0
                * (1.0 - (-seconds / tuning::CRATER_GROWTH_TAU_S).exp());
            TimeSeriesSample {
                time_sec,
                shockwave_radius_km: tuning::SOUND_SPEED_KMS * seconds,
                crater_diameter_km: crater_diameter_m / 1000.0,
            }
        })
        .collect()
}
