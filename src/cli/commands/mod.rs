pub mod config;
pub mod db;
pub mod enroll;
pub mod init;
pub mod log;
pub mod record;
pub mod scans;
pub mod serve;
pub mod status;
pub mod workers;
