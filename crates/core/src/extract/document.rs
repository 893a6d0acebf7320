//! Read-only document handle over a parsed HTML tree.

use std::sync::LazyLock;

use scraper::html::Select;
use scraper::{ElementRef, Html, Node, Selector};

static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").expect("BODY_SELECTOR should parse"));
static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").expect("TITLE_SELECTOR should parse"));

/// Elements whose text never reaches the reader.
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template", "iframe", "object"];

/// Elements that start a new line when rendered.
const BLOCK_TAGS: &[&str] = &[
	"address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
	"header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// A parsed HTML document.
///
/// Extraction only ever reads through this handle.
#[derive(Debug, Clone)]
pub struct Document {
	html: Html,
}

impl Document {
	/// Parse a full HTML document. Malformed markup is recovered the way a
	/// browser would, so this never fails.
	pub fn parse(html: &str) -> Self {
		Self {
			html: Html::parse_document(html),
		}
	}

	/// Wrap an already parsed tree, e.g. a fragment without a `<body>`.
	pub fn from_html(html: Html) -> Self {
		Self { html }
	}

	pub fn html(&self) -> &Html {
		&self.html
	}

	/// First element matching `selector` in document order.
	pub fn select_first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
		self.html.select(selector).next()
	}

	/// All elements matching `selector` in document order.
	pub fn select_all<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
		self.html.select(selector)
	}

	pub fn body(&self) -> Option<ElementRef<'_>> {
		self.select_first(&BODY_SELECTOR)
	}

	pub fn title(&self) -> Option<String> {
		let title = self.select_first(&TITLE_SELECTOR)?;
		let text = title.text().collect::<String>();
		let text = text.trim();
		(!text.is_empty()).then(|| text.to_string())
	}
}

/// Reader-visible text of `element`.
///
/// Text under script-like elements is skipped and every nested block
/// element sits on its own line. Whitespace is otherwise left as found.
pub fn visible_text(element: ElementRef<'_>) -> String {
	let mut out = String::new();
	push_visible(element, &mut out);
	out
}

fn push_visible(element: ElementRef<'_>, out: &mut String) {
	for child in element.children() {
		match child.value() {
			Node::Text(text) => out.push_str(text),
			Node::Element(el) if HIDDEN_TAGS.contains(&el.name()) => {}
			Node::Element(el) => {
				let Some(child) = ElementRef::wrap(child) else {
					continue;
				};
				let block = BLOCK_TAGS.contains(&el.name());
				if block {
					break_line(out);
				}
				push_visible(child, out);
				if block {
					break_line(out);
				}
			}
			_ => {}
		}
	}
}

/// Start a new line unless one was just started.
fn break_line(out: &mut String) {
	if !out.is_empty() && !out.ends_with('\n') {
		out.push('\n');
	}
}
