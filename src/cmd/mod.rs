mod build;
mod clean;
mod list;
mod show;
mod watch;

pub use build::build;
pub use clean::clean;
pub use list::list;
pub use show::show;
pub use watch::watch;
