pub mod console;
pub mod email;

pub use console::format_ranked_table;
pub use email::{build_html, EmailSender};
