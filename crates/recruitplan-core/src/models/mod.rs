pub mod demographic;
pub mod enrollment;
pub mod gap;
pub mod plan;
pub mod population;
pub mod screening;
pub mod strategy;
