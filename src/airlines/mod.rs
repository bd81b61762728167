pub mod detail;
pub mod lister;

use lazy_regex::regex;
use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One airline and the page listing its fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineRef {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aircraft {
    pub aircraft_name: String,
    pub seatmap_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineRecord {
    pub name: String,
    pub url: String,
    pub display_name: String,
    pub aircraft: Vec<Aircraft>,
}

impl fmt::Display for AirlineRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name            : {}", self.name)?;
        writeln!(f, "Display Name    : {}", self.display_name)?;
        writeln!(f, "Url             : {}", self.url)?;
        writeln!(f, "Aircraft        : ")?;
        for a in &self.aircraft {
            writeln!(f, "> {} ({})", a.aircraft_name, a.seatmap_url)?;
        }

        Ok(())
    }
}

const BREAKING: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav",
    "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];
const HIDDEN: &[&str] = &["script", "style", "template"];

fn push_text(el: ElementRef<'_>, out: &mut String) {
    let name = el.value().name();
    if HIDDEN.contains(&name) {
        return;
    }
    let breaking = BREAKING.contains(&name);
    if breaking {
        out.push(' ');
    }
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child) {
            push_text(child, out);
        }
    }
    if breaking {
        out.push(' ');
    }
}

/// Rendered text of an element: block boundaries and `<br>` separate words,
/// whitespace runs are collapsed and the result is trimmed.
pub(crate) fn inner_text(el: ElementRef<'_>) -> String {
    let mut text = String::new();
    push_text(el, &mut text);
    regex!(r"\s+").replace_all(text.trim(), " ").into_owned()
}
