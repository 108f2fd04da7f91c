//! Business logic services
//!
//! Services hold the engine's behavior; repositories below them hold
//! the SQL. All services are stateless and operate on a shared pool.

pub mod cycle;
pub mod payload;
pub mod program;

pub use cycle::CycleService;
pub use program::ProgramService;
