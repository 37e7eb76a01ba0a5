pub mod average;
pub mod init;
pub mod report;
pub mod students;
