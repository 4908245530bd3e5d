//! Fixed screen furniture around the editor: the header with the file path
//! and theme indicator, and the key hint line

pub mod header_render;
pub mod hint_line_render;
