pub mod policy;
pub mod sorting;
