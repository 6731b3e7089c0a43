/// damflow — instantaneous dam discharge computation engine.
///
/// Computes turbine, spillway, and hollow-cone-valve discharge from
/// operator-entered reservoir and unit-load readings, and advances
/// reservoir elevation over a single mass-balance step. All empirical
/// rating tables are compiled in; the engine is pure computation with
/// no I/O and no shared mutable state.
pub mod balance;
pub mod discharge;
pub mod hcv;
pub mod inputs;
pub mod interpolate;
pub mod reservoir;
pub mod spillway;
pub mod turbine;
