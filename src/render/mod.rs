//! Wiki markup rendering.
//!
//! This module converts a parsed document tree into wiki markup: `hN.`
//! headings, `*` bullets, `|cell|cell|` table rows and `!name!` pictures.
//!
//! # Example
//!
//! ```no_run
//! use docx2wiki::{parse_file, render::*};
//!
//! let tree = parse_file("document.docx")?;
//! let markup = to_wiki(&tree, &RenderOptions::default())?;
//! # Ok::<(), docx2wiki::Error>(())
//! ```

mod extract;
mod options;
mod wiki;

pub use extract::extract_text;
pub use options::{RenderOptions, MAX_HEADING_LEVEL};
pub use wiki::{
    dispatch, render_cell, render_paragraph, render_row, render_table, render_text_run, to_wiki,
    NodeKind, MAX_LIST_LEVEL,
};
