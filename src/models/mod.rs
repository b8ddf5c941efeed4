pub mod scan;
pub mod slot;
pub mod status;
pub mod worker;
