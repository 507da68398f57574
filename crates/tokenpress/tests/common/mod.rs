#![allow(dead_code)]

use std::sync::{Arc, LazyLock};

use tiktoken_rs::CoreBPE;
use tokenpress::{ModelDefinition, ModelId, Tokenizer, vocab::RankList};

pub const SAMPLES: &[&str] = &[
    "hello world",
    "Hello, world!",
    "The quick brown fox jumps over the lazy dog.",
    "It's a beautiful day, and I'll be taking my 3 dogs for a walk.",
    "Don't forget: the temperature is 72 degrees!",
    "This is a test with some special characters: !@#$%^&*()",
    "Mixed case TeXt with numbers 123 and symbols @#$",
    "Unicode characters: \u{4f60}\u{597d}, \u{4e16}\u{754c}!",
    "Multiple lines\nof text\nwith line breaks",
    "   Spaces   and   tabs\t\t\t",
    "  multiple   spaces  ",
    "line1\nline2\r\nline3",
    "123 + 456 = 789",
    "caf\u{00e9} na\u{00ef}ve \u{4f60}\u{597d}",
    "Geburtstag 2024: Alles Gute!",
    "$$$!!!...---",
    " ",
    "a",
    "\t\ttabs\tand\tspaces ",
    "emoji: \u{1f600}\u{1f680}\u{1f4a1}",
    "mixed: hello\u{00a0}world\u{2003}wide",
    "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
    "The quick brown fox jumps over the lazy dog. The quick brown fox jumps over the lazy dog.",
    "\u{041f}\u{0440}\u{0438}\u{0432}\u{0435}\u{0442} \u{043c}\u{0438}\u{0440}, \u{3053}\u{3093}\u{306b}\u{3061}\u{306f}",
    "\u{0645}\u{0631}\u{062d}\u{0628}\u{0627} \u{0628}\u{0627}\u{0644}\u{0639}\u{0627}\u{0644}\u{0645} \u{2014} \u{0928}\u{092e}\u{0938}\u{094d}\u{0924}\u{0947}",
    "fn main() {\n    println!(\"{}\", 1_000_000);\n}\n",
    "",
];

/// Rebuild a rank list from the embedded `tiktoken` data.
///
/// `unassigned` lists the ids below `first_special` that have no bytes.
pub fn tiktoken_rank_list(
    bpe: &CoreBPE,
    first_special: u32,
    unassigned: &[u32],
) -> RankList<u32> {
    (0..first_special)
        .filter(|rank| !unassigned.contains(rank))
        .map(|rank| {
            let bytes = bpe._decode_native_and_split(vec![rank]).next().unwrap();
            (bytes, rank)
        })
        .collect()
}

pub struct Reference {
    pub bpe: CoreBPE,
    pub rank_list: RankList<u32>,
    pub definition: Arc<ModelDefinition>,
    pub tokenizer: Tokenizer,
}

fn build_reference(
    id: ModelId,
    bpe: CoreBPE,
    unassigned: &[u32],
) -> Reference {
    let first_special = id
        .special_tokens()
        .iter()
        .map(|&(_, token)| token as u32)
        .min()
        .unwrap();
    let rank_list = tiktoken_rank_list(&bpe, first_special, unassigned);
    let definition: Arc<ModelDefinition> = ModelDefinition::build(id, rank_list.clone())
        .unwrap()
        .into();
    let tokenizer = Tokenizer::from_definition(definition.clone());
    Reference {
        bpe,
        rank_list,
        definition,
        tokenizer,
    }
}

pub static CL100K: LazyLock<Reference> = LazyLock::new(|| {
    build_reference(ModelId::Cl100kBase, tiktoken_rs::cl100k_base().unwrap(), &[100256])
});

pub static O200K: LazyLock<Reference> = LazyLock::new(|| {
    build_reference(ModelId::O200kBase, tiktoken_rs::o200k_base().unwrap(), &[199998])
});
