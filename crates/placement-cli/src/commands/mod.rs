pub mod batch;
pub mod nest;
pub mod policy;
pub mod swap;
pub mod validate;
pub mod zones;
