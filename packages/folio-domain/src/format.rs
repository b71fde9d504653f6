//! The formatter registry: one pure function per collection, each reading a
//! fixed set of named source fields and writing the derived summary fields
//! (`Results`, and where defined `Results_nonEnglish` / `Results_original`)
//! back into the source. Formatters are additive and never remove fields;
//! missing inputs render as empty tokens rather than failing.

use crate::{FieldValue, SourceMap, display_text};

fn put(source: &mut SourceMap, key: &str, text: String) {
	source.insert(key.to_string(), FieldValue::Text(text));
}

pub(crate) fn identity(_source: &mut SourceMap) {}

pub(crate) fn arabic_poems(source: &mut SourceMap) {
	let title = display_text(source, "title");
	let translated_title = display_text(source, "translated_title");
	let poet = display_text(source, "poet");
	let era = display_text(source, "era");
	let translated_poem = display_text(source, "translated_poem");
	let poem = display_text(source, "poem");

	put(
		source,
		"Results",
		format!(
			"Title: {title} | Translated: {translated_title}\nPoet: {poet} from {era}\n\
			Translated Text: {translated_poem}"
		),
	);
	put(source, "Results_nonEnglish", format!("Title: {title}\nPoet: {poet}\nPoem:\n{poem}"));
	put(source, "Results_original", format!("{title}\n\n{poem}"));
}

pub(crate) fn cleaned_dutchtext(source: &mut SourceMap) {
	let title = display_text(source, "title");
	let translation = display_text(source, "translation");
	let interpretation = display_text(source, "interpretation");
	let text = display_text(source, "text");

	put(
		source,
		"Results",
		format!("Title: {title}\n\nTranslated Text:\n{translation}\n\nInterpretation:\n{interpretation}"),
	);
	put(source, "Results_nonEnglish", format!("Title: {title}\n\n{text}"));
	put(source, "Results_original", format!("{title}\n\n{text}"));
}

pub(crate) fn cleaned_arabicbooks(source: &mut SourceMap) {
	let title = display_text(source, "title");
	let title_transliterated = display_text(source, "title_transliterated");
	let author = display_text(source, "author");
	let date = display_text(source, "date");
	let publisher = display_text(source, "publisher");
	let translation = display_text(source, "translation");
	let pdf_url = display_text(source, "pdf_url");
	let full_text = display_text(source, "full_text");

	put(
		source,
		"Results",
		format!(
			"Book title: {title} {title_transliterated}\n\nAuthor(s):\n\n{author}\n\n\
			Date: {date}\n\nPublisher: {publisher}\n\nTranslated page content:\n\n\
			{translation}\n\nURL: {pdf_url}"
		),
	);
	put(
		source,
		"Results_nonEnglish",
		format!(
			"Title: {title}\nAuthor: {author}\nDate: {date}\nPublisher: {publisher}\n\
			URL: {pdf_url}\n\n{full_text}"
		),
	);
}

pub(crate) fn libertarian_chunks(source: &mut SourceMap) {
	let title = display_text(source, "title");
	let author = display_text(source, "author");
	let date = display_text(source, "date");
	let publisher = display_text(source, "publisher");
	let text = display_text(source, "text");
	let title_url = display_text(source, "title_url");

	put(
		source,
		"Results",
		format!(
			"Title: {title}\nAuthor(s): {author}\nDate: {date}\nPublisher: {publisher}\n\n\
			{text}\n\nURL: {title_url}"
		),
	);
}

pub(crate) fn legaltext(source: &mut SourceMap) {
	let title = display_text(source, "title");
	let url = display_text(source, "url");
	let explanation = display_text(source, "explanation");
	let answer1 = display_text(source, "answer1");
	let answer2 = display_text(source, "answer2");

	put(
		source,
		"Results",
		format!(
			"Title: {title}\nURL: {url}\n\nExplanation:\n{explanation}\n\n\
			Answer 1:\n{answer1}\n\nAnswer 2:\n{answer2}"
		),
	);
}

pub(crate) fn indian_lit(source: &mut SourceMap) {
	let author = display_text(source, "author");
	let book = display_text(source, "book");
	let chapter = display_text(source, "chapter");
	let editor = display_text(source, "editor");
	let interpretation = display_text(source, "interpretation");
	let paragraph = display_text(source, "paragraph");
	let publication = display_text(source, "publication");
	let subject = display_text(source, "subject");
	let title = display_text(source, "title");
	let translation = display_text(source, "translation");
	let url = display_text(source, "url");
	let input_token = display_text(source, "input_token");
	let output_token = display_text(source, "output_token");

	put(
		source,
		"Results",
		format!(
			"Author: {author}\nBook: {book}\nChapter: {chapter}\nEditor: {editor}\n\n\
			Interpretation:\n{interpretation}\n\nParagraph: {paragraph}\n\
			Publication: {publication}\nSubject: {subject}\nTitle: {title}\n\n\
			Translation:\n{translation}\n\nURL: {url}\n\
			Tokens: {input_token} in / {output_token} out"
		),
	);
}
