//! Flat text extraction.

use crate::model::Element;
use crate::namespace::{PICTURE, WORDPROCESSING};

use super::options::RenderOptions;

/// Collect the text of `node` and all its descendants, in document order.
///
/// Text runs (`w:t`) contribute their content verbatim; named pictures
/// (`pic:cNvPr`) contribute `!name!`. Structure is ignored. A run without
/// text or a picture without a `name` contributes an empty value rather
/// than failing.
pub fn extract_text(node: &Element, options: &RenderOptions) -> String {
    let mut text = String::new();

    for element in node.descendants() {
        if element.is(WORDPROCESSING, "t") {
            text.push_str(element.text());
        } else if options.include_pictures && element.is(PICTURE, "cNvPr") {
            text.push('!');
            text.push_str(element.attribute("name").unwrap_or_default());
            text.push('!');
        }
    }

    text
}
