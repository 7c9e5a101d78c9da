pub mod calculate;
pub mod health;
pub mod plan;
pub mod references;
