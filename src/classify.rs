//! Classification of model identifiers into construction-method categories.
//!
//! Rules are ordered and first match wins; evaluation order matters.

use crate::schema::Category;

/// Maps an identifier string to its category.
///
/// 1. `.faa` marks a protein-FASTA derived (CarveMe) name.
/// 2. `.seed` marks a ModelSEED-derived name.
/// 3. `GCF` marks a genome accession, i.e. a PEAR reconstruction.
/// 4. An underscore-separated segment of the form `i<alnum>+` marks a
///    published model name (iML1515 and friends).
/// 5. Anything else is `Other` and gets discarded by the filter.
pub fn classify(identifier: &str) -> Category {
    if identifier.contains(".faa") {
        return Category::CarveMe;
    }
    if identifier.contains(".seed") {
        return Category::ModelSeed;
    }
    if identifier.contains("GCF") {
        return Category::Pear;
    }
    if identifier.split('_').any(is_published_segment) {
        return Category::Published;
    }
    Category::Other
}

fn is_published_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some('i') => {
            let rest = chars.as_str();
            !rest.is_empty() && rest.chars().all(|c| c.is_alphanumeric())
        }
        _ => false,
    }
}
