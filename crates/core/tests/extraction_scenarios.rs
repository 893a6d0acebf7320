//! End-to-end behaviour of the strategy chain on whole documents.

use counterview::{Document, ExtractionResult, Extractor, Strategy, extract, normalize};

fn sentence(topic: &str) -> String {
	format!("Residents gathered to discuss {topic}, and the debate ran well past the scheduled closing time of the meeting.")
}

#[test]
fn article_page_returns_article_text() {
	let body = (0..5).map(|i| sentence(&format!("item {i}"))).collect::<Vec<_>>().join(" ");
	assert!(body.chars().count() >= 500);
	let html = format!(
		"<html><head><title>News</title><script>track()</script></head><body>\
		<header><a href='/'>Home</a></header>\
		<article>\n\t<p>{body}</p>\n</article>\
		<footer>Subscribe</footer></body></html>"
	);

	let result = extract(&Document::parse(&html));

	assert_eq!(result, ExtractionResult::Found(normalize(&body)));
}

#[test]
fn short_paragraphs_fall_through_to_not_found() {
	let paragraphs: String = (0..10).map(|i| format!("<p>Line {i}</p>")).collect();
	let html = format!("<html><body>{paragraphs}</body></html>");
	let document = Document::parse(&html);
	let extractor = Extractor::new();

	assert_eq!(Strategy::Paragraphs.run(&document, extractor.rules()), None);
	assert_eq!(extractor.extract(&document), ExtractionResult::NotFound);
}

#[test]
fn short_paragraphs_with_long_body_use_later_strategy() {
	let paragraphs: String = (0..10).map(|i| format!("<p>Line {i}</p>")).collect();
	let html = format!("<html><body>{paragraphs}<span>{}</span></body></html>", sentence("parking"));
	let extraction = Extractor::new().run(&Document::parse(&html)).expect("later strategy should match");

	assert_eq!(extraction.strategy, Strategy::LongestBlock);
	assert_eq!(extraction.candidate.text, sentence("parking"));
}

#[test]
fn heading_followed_by_loose_text_keeps_words_apart() {
	let html = format!("<body><article><h1>Headline</h1>{}</article></body>", sentence("parking"));
	let extraction = Extractor::new().run(&Document::parse(&html)).expect("article should match");

	assert_eq!(extraction.strategy, Strategy::Semantic);
	assert_eq!(extraction.candidate.text, format!("Headline {}", sentence("parking")));
}

#[test]
fn paragraph_followed_by_inline_text_keeps_words_apart() {
	let words = "word ".repeat(40);
	let html = format!("<body><div><p>End of the first paragraph.</p><span>{words}</span></div></body>");
	let extraction = Extractor::new().run(&Document::parse(&html)).expect("container should match");

	assert_eq!(extraction.strategy, Strategy::LargestContainer);
	assert_eq!(extraction.candidate.text, format!("End of the first paragraph. {}", words.trim()));
}

#[test]
fn empty_document_is_not_found() {
	assert_eq!(extract(&Document::parse("<body></body>")), ExtractionResult::NotFound);
	assert_eq!(extract(&Document::parse("")), ExtractionResult::NotFound);
}

#[test]
fn malformed_markup_does_not_fail() {
	let html = format!("<main><h1>Broken<h1><p>{}<div><span>", sentence("zoning"));
	let result = extract(&Document::parse(&html));
	assert!(result.text().is_some_and(|text| text.contains("zoning")));
}

#[test]
fn extraction_is_idempotent() {
	let html = format!("<body><div class='content'><p>{}</p><p>{}</p></div></body>", sentence("budgets"), sentence("roads"));
	let document = Document::parse(&html);
	let before = document.html().html();

	let first = extract(&document);
	let second = extract(&document);

	assert_eq!(first, second);
	assert_eq!(document.html().html(), before);
}

#[test]
fn earliest_successful_strategy_wins() {
	let article = sentence("the article");
	let container = "x ".repeat(400);
	let html = format!("<body><div>{container}</div><article>{article}</article></body>");
	let document = Document::parse(&html);
	let extractor = Extractor::new();

	let later = Strategy::LargestContainer.run(&document, extractor.rules()).expect("container should match on its own");
	assert_ne!(later.text, article);

	let extraction = extractor.run(&document).expect("content should be found");
	assert_eq!(extraction.strategy, Strategy::Semantic);
	assert_eq!(extraction.candidate.text, article);
}

#[test]
fn paragraph_aggregation_drops_chrome() {
	let html = format!(
		"<body><p>Sign in</p><p>{}</p><p>42 shares</p><p>Twitter</p><p>{}</p></body>",
		sentence("schools"),
		sentence("parks")
	);
	let extraction = Extractor::new().run(&Document::parse(&html)).expect("paragraphs should match");

	assert_eq!(extraction.strategy, Strategy::Paragraphs);
	assert_eq!(extraction.candidate.text, format!("{}\n\n{}", sentence("schools"), sentence("parks")));
}

#[test]
fn found_text_always_clears_threshold() {
	let pages = [
		format!("<article>{}</article>", sentence("a")),
		format!("<p>{}</p>", sentence("b")),
		format!("<section>{}</section>", "y ".repeat(150)),
		format!("<div>{}</div>", "word ".repeat(30)),
		"<body>plain body text that is not wrapped in anything at all but goes on for quite a while to pass</body>".repeat(2),
	];

	for html in &pages {
		if let ExtractionResult::Found(text) = extract(&Document::parse(html)) {
			assert!(text.chars().count() > 100, "{html}: {text:?}");
		}
	}
}
