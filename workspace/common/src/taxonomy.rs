//! Fixed product taxonomy and form option sets.
//!
//! The category/sub-category relation is a client-side enumeration, not
//! server-supplied: a category constrains which sub-categories are legal,
//! and the entry forms rely on that to cascade their selects.

/// Segment options for the sale entry form.
pub const SEGMENTS: [&str; 3] = ["Consumer", "Corporate", "Home Office"];

/// Region options for the sale entry form.
pub const REGIONS: [&str; 4] = ["Central", "East", "West", "South"];

/// Top-level product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    OfficeSupplies,
    Furniture,
    Technology,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::OfficeSupplies,
        Category::Furniture,
        Category::Technology,
    ];

    /// The label used in form values and API payloads.
    pub fn label(self) -> &'static str {
        match self {
            Category::OfficeSupplies => "Office Supplies",
            Category::Furniture => "Furniture",
            Category::Technology => "Technology",
        }
    }

    pub fn parse(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Legal sub-category values for this category.
    pub fn sub_categories(self) -> &'static [&'static str] {
        match self {
            Category::OfficeSupplies => {
                &["Paper", "Labels", "Storage", "Supplies", "Binders", "Art"]
            }
            Category::Furniture => &["Chairs", "Tables", "Furnishings", "Bookcases"],
            Category::Technology => &["Phones", "Machines", "Accessories", "Copiers"],
        }
    }
}

/// Sub-category options implied by a category form value. Unknown or empty
/// category values yield the empty set, which also disables the dependent
/// select.
pub fn sub_categories_for(category_label: &str) -> &'static [&'static str] {
    Category::parse(category_label)
        .map(Category::sub_categories)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_parses_its_own_label() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.label()), Some(category));
        }
    }

    #[test]
    fn technology_sub_categories() {
        assert_eq!(
            sub_categories_for("Technology"),
            ["Phones", "Machines", "Accessories", "Copiers"]
        );
    }

    #[test]
    fn unknown_category_has_no_options() {
        assert!(sub_categories_for("").is_empty());
        assert!(sub_categories_for("Groceries").is_empty());
    }
}
