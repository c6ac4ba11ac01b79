pub mod codec;
pub mod path;

pub use codec::{decode_dir_name, project_directory};
pub use path::*;
