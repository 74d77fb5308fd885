pub mod area;
pub mod init;
pub mod merge;
pub mod transform;
