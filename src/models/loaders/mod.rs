pub mod text_loader;

pub use text_loader::{
    check_required_inputs, load_lesson_materials, read_lines, read_text, resolve_inputs,
    split_lines,
};
