//! Tongue Tide progress core: a flat key-value activity log store,
//! pure progress aggregation and achievement evaluation, and the
//! refresh orchestration that publishes render-ready snapshots.

pub mod models;
pub mod services;
pub mod store;
pub mod utils;
