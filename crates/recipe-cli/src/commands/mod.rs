pub mod init;
pub mod library;
pub mod misc;
pub mod recipes;
