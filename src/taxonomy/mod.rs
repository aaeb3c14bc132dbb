pub mod budget;

pub use budget::{tier_for_amount, BudgetRange, BUDGET_RANGES};

/// A leaf of the taxonomy: a subcategory and the keywords that signal it.
#[derive(Debug, Clone, Copy)]
pub struct Subcategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub subcategories: &'static [Subcategory],
}

/// Category → subcategory → keyword table.
///
/// Declaration order is significant: the classifier breaks score ties in
/// favour of whichever entry is declared first.
#[derive(Debug, Clone, Copy)]
pub struct Taxonomy {
    categories: &'static [Category],
}

const STANDARD_CATEGORIES: &[Category] = &[
    Category {
        name: "web_development",
        subcategories: &[
            Subcategory {
                name: "frontend",
                keywords: &["react", "vue", "angular", "javascript", "typescript", "html", "css"],
            },
            Subcategory {
                name: "backend",
                keywords: &["node", "python", "php", "laravel", "django", "express"],
            },
            Subcategory {
                name: "fullstack",
                keywords: &["full-stack", "fullstack", "mern", "mean", "lamp"],
            },
            Subcategory {
                name: "wordpress",
                keywords: &["wordpress", "wp", "elementor", "gutenberg", "woocommerce"],
            },
        ],
    },
    Category {
        name: "mobile_apps",
        subcategories: &[
            Subcategory {
                name: "ios",
                keywords: &["ios", "swift", "objective-c", "xcode"],
            },
            Subcategory {
                name: "android",
                keywords: &["android", "kotlin", "java", "android studio"],
            },
            Subcategory {
                name: "react_native",
                keywords: &["react native", "expo"],
            },
            Subcategory {
                name: "flutter",
                keywords: &["flutter", "dart"],
            },
        ],
    },
    Category {
        name: "ai_ml",
        subcategories: &[
            Subcategory {
                name: "chatbots",
                keywords: &["chatbot", "bot", "conversational ai", "dialogue"],
            },
            Subcategory {
                name: "automation",
                keywords: &["automation", "scraping", "workflow", "zapier"],
            },
            Subcategory {
                name: "data_analysis",
                keywords: &["data analysis", "pandas", "numpy", "visualization"],
            },
            Subcategory {
                name: "machine_learning",
                keywords: &["machine learning", "ai", "tensorflow", "pytorch"],
            },
        ],
    },
    Category {
        name: "design",
        subcategories: &[
            Subcategory {
                name: "ui_ux",
                keywords: &["ui", "ux", "user experience", "user interface"],
            },
            Subcategory {
                name: "graphic_design",
                keywords: &["logo", "branding", "graphic design", "photoshop"],
            },
            Subcategory {
                name: "branding",
                keywords: &["brand identity", "brand design", "corporate identity"],
            },
            Subcategory {
                name: "figma",
                keywords: &["figma", "sketch", "adobe xd"],
            },
        ],
    },
];

impl Taxonomy {
    /// The freelance marketplace taxonomy used by default.
    pub fn standard() -> Self {
        Self {
            categories: STANDARD_CATEGORIES,
        }
    }

    /// Builds a taxonomy over a caller-provided table.
    ///
    /// Returns `None` when the table has no categories or any category has
    /// no subcategories, since classification must always yield a valid pair.
    pub fn from_static(categories: &'static [Category]) -> Option<Self> {
        if categories.is_empty() || categories.iter().any(|c| c.subcategories.is_empty()) {
            return None;
        }
        Some(Self { categories })
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn category(&self, name: &str) -> Option<&'static Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Every keyword across all categories, in declaration order.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> {
        self.categories
            .iter()
            .flat_map(|c| c.subcategories.iter())
            .flat_map(|s| s.keywords.iter().copied())
    }

    pub fn contains(&self, category: &str, subcategory: &str) -> bool {
        self.category(category)
            .map(|c| c.subcategories.iter().any(|s| s.name == subcategory))
            .unwrap_or(false)
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::standard()
    }
}
