pub mod assign;
pub mod dispatch;
pub mod init;
pub mod loads;
pub mod mentee;
pub mod mentor;
pub mod notification;
pub mod shared;
