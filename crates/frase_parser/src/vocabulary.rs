//! The closed vocabulary of the grammar.
//!
//! Four disjoint sets of lowercase word forms. The vocabulary is built once,
//! on first use, and is read-only afterwards; every caller shares the same
//! instance through [`Vocabulary::global`].

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::token::TokenCategory;

const ARTICLES: &[&str] = &["el", "la", "un", "una", "los", "las"];

const NOUNS: &[&str] = &[
    "perro",
    "perros",
    "gato",
    "gatos",
    "niño",
    "niña",
    "niños",
    "niñas",
    "casa",
    "casas",
    "libro",
    "libros",
    "árbol",
    "árboles",
    "computadora",
    "computadoras",
    "carro",
    "carros",
    "hueso",
    "huesos",
];

const ADJECTIVES: &[&str] = &[
    "grande", "grandes", "pequeño", "pequeña", "pequeños", "pequeñas", "rojo", "roja", "rojos",
    "rojas", "azul", "azules", "hermoso", "hermosa", "hermosos", "hermosas", "viejo", "vieja",
    "viejos", "viejas", "nuevo", "nueva", "nuevos", "nuevas", "rápido", "rápida", "rápidos",
    "rápidas",
];

const VERBS: &[&str] = &[
    "come", "comen", "lee", "leen", "ve", "ven", "quiere", "quieren", "tiene", "tienen", "busca",
    "buscan", "escribe", "escriben", "maneja", "manejan",
];

static VOCABULARY: LazyLock<Vocabulary> = LazyLock::new(Vocabulary::builtin);

/// A word that appears in more than one vocabulary set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overlap {
    /// The shared word
    pub word: &'static str,
    /// First category containing it
    pub first: TokenCategory,
    /// Second category containing it
    pub second: TokenCategory,
}

/// Read-only storage for the four word classes.
#[derive(Debug)]
pub struct Vocabulary {
    articles: HashSet<&'static str>,
    nouns: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
    verbs: HashSet<&'static str>,
}

impl Vocabulary {
    fn builtin() -> Self {
        Self {
            articles: ARTICLES.iter().copied().collect(),
            nouns: NOUNS.iter().copied().collect(),
            adjectives: ADJECTIVES.iter().copied().collect(),
            verbs: VERBS.iter().copied().collect(),
        }
    }

    /// Returns the process-wide vocabulary.
    #[must_use]
    pub fn global() -> &'static Self {
        &VOCABULARY
    }

    fn set(&self, category: TokenCategory) -> Option<&HashSet<&'static str>> {
        match category {
            TokenCategory::Article => Some(&self.articles),
            TokenCategory::Noun => Some(&self.nouns),
            TokenCategory::Adjective => Some(&self.adjectives),
            TokenCategory::Verb => Some(&self.verbs),
            TokenCategory::EndOfInput | TokenCategory::Unknown => None,
        }
    }

    /// Classifies an already-lowercased word.
    ///
    /// Sets are checked in the order article, noun, adjective, verb; a word
    /// in none of them is [`TokenCategory::Unknown`].
    #[must_use]
    pub fn classify(&self, word: &str) -> TokenCategory {
        TokenCategory::LEXICAL
            .into_iter()
            .find(|&category| self.contains(category, word))
            .unwrap_or(TokenCategory::Unknown)
    }

    /// Checks whether `word` belongs to the set for `category`.
    ///
    /// Always false for [`TokenCategory::EndOfInput`] and
    /// [`TokenCategory::Unknown`], which have no word set.
    #[must_use]
    pub fn contains(&self, category: TokenCategory, word: &str) -> bool {
        self.set(category).is_some_and(|set| set.contains(word))
    }

    /// Returns the words of a category in sorted order.
    #[must_use]
    pub fn words(&self, category: TokenCategory) -> Vec<&'static str> {
        let mut words: Vec<_> = self
            .set(category)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        words.sort_unstable();
        words
    }

    /// Iterates over every word with its category, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, TokenCategory)> + '_ {
        TokenCategory::LEXICAL.into_iter().flat_map(move |category| {
            self.set(category)
                .into_iter()
                .flatten()
                .map(move |&word| (word, category))
        })
    }

    /// Total number of words across all four sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len() + self.nouns.len() + self.adjectives.len() + self.verbs.len()
    }

    /// Returns true if no words are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lists every word found in two sets.
    ///
    /// A non-empty result is a defect in the word lists, not an input error.
    #[must_use]
    pub fn overlaps(&self) -> Vec<Overlap> {
        let mut overlaps = Vec::new();
        for (i, &first) in TokenCategory::LEXICAL.iter().enumerate() {
            for &second in &TokenCategory::LEXICAL[i + 1..] {
                for word in self.words(first) {
                    if self.contains(second, word) {
                        overlaps.push(Overlap {
                            word,
                            first,
                            second,
                        });
                    }
                }
            }
        }
        overlaps
    }
}
