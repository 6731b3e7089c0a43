/// Turbine discharge model.
///
/// An empirical polynomial chain fitted to powerhouse commissioning data
/// converts per-unit electrical load and hydraulic head into discharge.
/// The fit is only valid for active units at or above 15 MW; below that
/// the aggregate must be read manually.
pub mod constants;
pub mod processes;
pub mod run;

pub use constants::{MIN_MODEL_LOAD, N_UNITS};
pub use run::{active_units, compute, TurbineOutput};
