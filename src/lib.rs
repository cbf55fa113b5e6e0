pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod summary;
pub mod sweep;
pub mod tpa;

pub use config::SweepConfig;
pub use error::{Result, SweepError};
pub use sweep::{AirspeedSweep, TpaPoint};
pub use tpa::{constrain, reference_ratio_factor, smooth_inverse_factor};
