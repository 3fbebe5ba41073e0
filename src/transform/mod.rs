pub mod affine;
pub mod descriptor;
