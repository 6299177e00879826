mod mentee;
mod mentor;
mod notification;

pub use mentee::MenteeCommands;
pub use mentor::MentorCommands;
pub use notification::NotificationCommands;
