pub mod assemble;
pub mod extract;

pub use assemble::{assemble_blocks, load_export};
pub use extract::extract_field;
