pub mod applications;
pub mod import;
