mod copy_dir;
mod move_into;

pub use copy_dir::copy_dir_all;
pub use move_into::{move_dir_into, move_file_into, remove_tree};
