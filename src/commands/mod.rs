mod info;
mod list;
mod remove;

pub use info::run_info;
pub use list::run_list;
pub use remove::{RemoveRequest, run_remove};
