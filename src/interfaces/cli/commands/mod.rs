mod config_gen;
mod helpers;
mod reorder;
mod submit;
mod validate;

pub use config_gen::config_generate;
pub use reorder::reorder_section;
pub use submit::{delete_section, reset_section, save_section};
pub use validate::validate_section;
