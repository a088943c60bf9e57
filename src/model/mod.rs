pub mod task;
pub mod list;

pub use task::*;
pub use list::*;
