mod list;
mod seed;

pub use list::cmd_list;
pub use seed::cmd_seed;
