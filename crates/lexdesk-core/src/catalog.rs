//! Document library filtering by category.

use crate::model::Document;

/// Sentinel category that selects the whole library.
pub const ALL_DOCUMENTS: &str = "Все документы";

/// Categories offered by the documents tab, sentinel first.
pub const CATEGORIES: &[&str] = &[
    ALL_DOCUMENTS,
    "Постановления",
    "Протоколы",
    "Ходатайства",
    "Уведомления",
];

/// Documents visible under `category`.
///
/// The [`ALL_DOCUMENTS`] sentinel returns every document; any other value is
/// an exact match on [`Document::category`].
pub fn filter<'a>(category: &str, documents: &'a [Document]) -> Vec<&'a Document> {
    if category == ALL_DOCUMENTS {
        return documents.iter().collect();
    }
    documents.iter().filter(|d| d.category == category).collect()
}

/// Badge count for every entry of [`CATEGORIES`], in order.
pub fn category_counts(documents: &[Document]) -> Vec<(&'static str, usize)> {
    CATEGORIES
        .iter()
        .map(|&c| (c, filter(c, documents).len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, category: &str) -> Document {
        Document {
            id: id.into(),
            title: format!("Документ {id}"),
            category: category.into(),
            code: "УПК РФ ст. 146".into(),
            description: String::new(),
        }
    }

    fn library() -> Vec<Document> {
        vec![
            doc("1", "Протоколы"),
            doc("2", "Постановления"),
            doc("3", "Протоколы"),
            doc("4", "Постановления"),
            doc("5", "Протоколы"),
        ]
    }

    #[test]
    fn sentinel_is_identity() {
        let docs = library();
        let all = filter(ALL_DOCUMENTS, &docs);
        assert_eq!(all.len(), docs.len());
        assert!(all.iter().zip(docs.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn exact_category_match() {
        let docs = library();
        let protocols = filter("Протоколы", &docs);
        assert_eq!(protocols.len(), 3);
        assert!(protocols.iter().all(|d| d.category == "Протоколы"));
    }

    #[test]
    fn no_partial_or_case_insensitive_match() {
        let docs = library();
        assert!(filter("протоколы", &docs).is_empty());
        assert!(filter("Протокол", &docs).is_empty());
    }

    #[test]
    fn unknown_category_is_empty() {
        assert!(filter("Уведомления", &library()).is_empty());
    }

    #[test]
    fn counts_follow_category_order() {
        let counts = category_counts(&library());
        assert_eq!(
            counts,
            vec![
                (ALL_DOCUMENTS, 5),
                ("Постановления", 2),
                ("Протоколы", 3),
                ("Ходатайства", 0),
                ("Уведомления", 0),
            ]
        );
    }
}
