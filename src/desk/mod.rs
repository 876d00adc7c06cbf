mod command;
mod errors;
mod front_desk;
mod replay;
mod session;

pub use front_desk::FrontDesk;
pub use replay::replay_file;
pub use session::Session;
