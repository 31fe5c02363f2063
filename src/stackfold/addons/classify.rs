//! Picks the addons fragments out of a directory listing.

use crate::model::{Category, YAML_EXTENSIONS};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedFile {
    pub name: String,
    pub category: Category,
}

/// Splits `name` at its last dot into base name and extension (dot included).
///
/// A leading dot counts, so `.yaml` has an empty base name.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

/// The category of a single file, or `None` when it is not a YAML fragment.
pub fn classify(name: &str) -> Option<Category> {
    let (stem, ext) = split_extension(name);
    if !YAML_EXTENSIONS.contains(&ext) {
        return None;
    }
    Some(Category::from_stem(stem))
}

/// Keeps the YAML files of a listing, in order, tagged with their category.
pub fn classify_all<I: AsRef<str>>(names: &[I]) -> Vec<ClassifiedFile> {
    names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            classify(name).map(|category| ClassifiedFile {
                name: name.to_string(),
                category,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_yaml_extensions_are_kept() {
        assert_eq!(classify("a.yaml"), Some(Category::Resources));
        assert_eq!(classify("a.yml"), Some(Category::Resources));
        assert_eq!(classify("a.YAML"), None);
        assert_eq!(classify("a.yaml.bak"), None);
        assert_eq!(classify("notes.txt"), None);
        assert_eq!(classify("Makefile"), None);
    }

    #[test]
    fn reserved_names_route_exactly() {
        assert_eq!(classify("params.yaml"), Some(Category::Parameters));
        assert_eq!(classify("params.yml"), Some(Category::Parameters));
        assert_eq!(classify("outputs.yaml"), Some(Category::Outputs));
        assert_eq!(classify("outputs.yml"), Some(Category::Outputs));
        assert_eq!(classify("Params.yaml"), Some(Category::Resources));
        assert_eq!(classify("my-params.yaml"), Some(Category::Resources));
        assert_eq!(classify("params.tmpl.yaml"), Some(Category::Resources));
    }

    #[test]
    fn dotfile_named_after_extension_is_a_resource() {
        assert_eq!(split_extension(".yaml"), ("", ".yaml"));
        assert_eq!(classify(".yaml"), Some(Category::Resources));
    }

    #[test]
    fn classify_all_preserves_order_and_drops_others() {
        let names = ["notes.txt", "params.yaml", "b.yaml", "outputs.yaml", "a.yml", "README"];
        let classified = classify_all(&names);
        let got: Vec<(&str, Category)> = classified
            .iter()
            .map(|f| (f.name.as_str(), f.category))
            .collect();
        assert_eq!(
            got,
            vec![
                ("params.yaml", Category::Parameters),
                ("b.yaml", Category::Resources),
                ("outputs.yaml", Category::Outputs),
                ("a.yml", Category::Resources),
            ]
        );
    }
}
