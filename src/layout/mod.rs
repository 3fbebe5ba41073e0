pub mod bounds;
pub mod solver;
pub mod transformer;
