//! addapt-core
//!
//! Pure domain types for the Addapt adult ADHD assessment: raw instrument
//! answers, background history, and the completed `Assessment` record.
//! No scoring rules live here; this is the shared vocabulary that the
//! instrument and export crates agree on.

pub mod error;
pub mod models;
