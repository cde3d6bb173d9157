//! Translation between CMS identifiers and URL slugs

/// Turn a CMS identifier into a slug (`WHO_ARE_WE` -> `who-are-we`)
pub fn slugify(id: &str) -> String {
    id.replace('_', "-").to_lowercase()
}

/// Turn a slug back into a CMS identifier (`who-are-we` -> `WHO_ARE_WE`)
pub fn unslugify(slug: &str) -> String {
    slug.replace('-', "_").to_uppercase()
}
