//! Liftplan Program Generation & Progression Engine
//!
//! Converts a lifter's 1RMs into a full multi-week, session-by-session
//! prescription, places it onto real calendar dates, and tracks a
//! user's advancement through the resulting cycle. Persistence lives in
//! the repository layer; generation itself is pure, synchronous
//! computation.

pub mod accessories;
pub mod config;
pub mod db;
pub mod error;
pub mod programs;
pub mod repositories;
pub mod scheduler;
pub mod services;
