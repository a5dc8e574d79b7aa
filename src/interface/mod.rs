pub mod prompts;
pub mod render;

pub use prompts::{prompt_yes_no, resolve_menu_file};
pub use render::{display_rejections, display_report, render_table};
