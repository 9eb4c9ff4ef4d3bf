pub mod clean;
pub mod compile;
pub mod init;
pub mod locate;
