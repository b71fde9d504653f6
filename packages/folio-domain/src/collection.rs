use serde::{Deserialize, Serialize};

use crate::{SourceMap, format};

/// One supported corpus. Each collection carries its backing engine index,
/// the vector field targeted by the neural query, and the formatter that
/// derives its display fields. Adding a corpus means adding one variant and
/// its three table entries below.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collection {
	ArabicPoems,
	CleanedDutchtext,
	CleanedArabicbooks,
	LibertarianChunks,
	Legaltext,
	IndianLit,
	Loc,
	Openalex,
}
impl Collection {
	pub const ALL: [Self; 8] = [
		Self::ArabicPoems,
		Self::CleanedDutchtext,
		Self::CleanedArabicbooks,
		Self::LibertarianChunks,
		Self::Legaltext,
		Self::IndianLit,
		Self::Loc,
		Self::Openalex,
	];

	/// URL path segment; must stay in lockstep with the serde rename.
	pub fn slug(self) -> &'static str {
		match self {
			Self::ArabicPoems => "arabic-poems",
			Self::CleanedDutchtext => "cleaned-dutchtext",
			Self::CleanedArabicbooks => "cleaned-arabicbooks",
			Self::LibertarianChunks => "libertarian-chunks",
			Self::Legaltext => "legaltext",
			Self::IndianLit => "indian-lit",
			Self::Loc => "loc",
			Self::Openalex => "openalex",
		}
	}

	pub fn index(self) -> &'static str {
		match self {
			Self::ArabicPoems => "arabic-poems-index",
			Self::CleanedDutchtext => "cleaned-dutchtext-index",
			Self::CleanedArabicbooks => "cleaned-arabicbooks-index",
			Self::LibertarianChunks => "libertarian-chunks-index",
			Self::Legaltext => "legaltext-index",
			Self::IndianLit => "indian-lit-index",
			Self::Loc => "loc-index",
			Self::Openalex => "openalex-index",
		}
	}

	/// The stored embedding field: searched by the neural query and excluded
	/// from returned sources to keep multi-kilobyte float arrays off the wire.
	pub fn vector_field(self) -> &'static str {
		match self {
			Self::ArabicPoems => "interpretation_embedding",
			Self::CleanedDutchtext | Self::CleanedArabicbooks => "raw_response_embedding",
			Self::LibertarianChunks => "text_embedding",
			Self::Legaltext => "explanation_embedding",
			Self::IndianLit => "interpretation_embedding",
			Self::Loc => "description_embedding",
			Self::Openalex => "abstract_embedding",
		}
	}

	pub fn formatter(self) -> fn(&mut SourceMap) {
		match self {
			Self::ArabicPoems => format::arabic_poems,
			Self::CleanedDutchtext => format::cleaned_dutchtext,
			Self::CleanedArabicbooks => format::cleaned_arabicbooks,
			Self::LibertarianChunks => format::libertarian_chunks,
			Self::Legaltext => format::legaltext,
			Self::IndianLit => format::indian_lit,
			// No display fields defined for these corpora.
			Self::Loc | Self::Openalex => format::identity,
		}
	}
}
