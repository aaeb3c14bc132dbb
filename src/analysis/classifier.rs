use serde::Serialize;

use crate::taxonomy::{Subcategory, Taxonomy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: &'static str,
    pub subcategory: &'static str,
}

pub struct Classifier {
    taxonomy: Taxonomy,
}

impl Classifier {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Picks the category, then the subcategory within it, with the most
    /// keyword hits in the title and description. Ties, including the
    /// all-zero case, go to the entry declared first.
    pub fn categorize(&self, title: &str, description: &str) -> Classification {
        let text = format!("{} {}", title, description).to_lowercase();

        let category = first_max_by_key(self.taxonomy.categories(), |category| {
            category
                .subcategories
                .iter()
                .map(|sub| keyword_hits(sub, &text))
                .sum()
        });

        let subcategory = first_max_by_key(category.subcategories, |sub| keyword_hits(sub, &text));

        Classification {
            category: category.name,
            subcategory: subcategory.name,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Taxonomy::standard())
    }
}

fn keyword_hits(subcategory: &Subcategory, text: &str) -> usize {
    subcategory
        .keywords
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count()
}

// `Iterator::max_by_key` keeps the last maximum; classification needs the first.
fn first_max_by_key<T, F>(items: &'static [T], mut key: F) -> &'static T
where
    F: FnMut(&T) -> usize,
{
    let mut best = &items[0];
    let mut best_score = key(best);

    for item in &items[1..] {
        let score = key(item);
        if score > best_score {
            best = item;
            best_score = score;
        }
    }

    best
}
