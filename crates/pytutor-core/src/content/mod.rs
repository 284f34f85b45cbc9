//! Static widget content: lessons, prompts, and HTML.

pub mod curriculum;
pub mod markup;
pub mod prompts;
pub mod shell;

pub use curriculum::{lookup, CurriculumEntry};
pub use prompts::ChatExchange;
pub use shell::{escape_html, render};
