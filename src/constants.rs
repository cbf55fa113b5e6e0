//! Numeric constants for the TPA factor models
//!
//! These constants define the fixed parameters of the two candidate
//! throttle PID attenuation curves. All airspeeds are in centimeters per
//! second, the flight-controller convention.

/// Baseline airspeed for the reference-ratio model, in cm/s.
/// The unclamped factor is 1.0 when airspeed equals this value.
pub const REFERENCE_AIRSPEED_CM_S: f32 = 2000.0;

/// Epsilon added to airspeed before division in the reference-ratio model.
/// Keeps the ratio finite at zero airspeed.
pub const AIRSPEED_EPSILON_CM_S: f32 = 0.01;

/// Exponent applied to the airspeed ratio in both models.
pub const TPA_EXPONENT: f32 = 1.3;

/// Scale for the smooth inverse-power model. Empirically chosen so the two
/// curves cross near the reference airspeed; no closed-form derivation.
pub const SMOOTH_MODEL_SCALE: f32 = 19608.0;

/// Lower bound of any TPA factor.
pub const TPA_FACTOR_MIN: f32 = 0.3;

/// Upper bound of any TPA factor.
pub const TPA_FACTOR_MAX: f32 = 2.0;
