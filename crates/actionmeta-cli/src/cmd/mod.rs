pub mod init;
pub mod resolve;
pub mod show;
pub mod validate;
