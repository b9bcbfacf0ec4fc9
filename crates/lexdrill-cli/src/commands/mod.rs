pub mod compare;
pub mod init;
pub mod list;
pub mod practice;
pub mod validate;
