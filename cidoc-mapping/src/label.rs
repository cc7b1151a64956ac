//! Display labels for entities

use cidoc_tei::ElementRef;

use crate::emit::lang_of;

/// `(label, lang)` for a name element.
///
/// `surname` and `forename` children give `"{surname}, {forename}"`; with
/// only one of them present that one is used. Otherwise the element text.
pub fn entity_label(name: &ElementRef<'_>, default_lang: &str) -> (String, String) {
    let part = |tag: &str| {
        name.first_child(tag)
            .map(|e| e.text())
            .filter(|t| !t.is_empty())
    };
    let label = match (part("surname"), part("forename")) {
        (Some(surname), Some(forename)) => format!("{surname}, {forename}"),
        (Some(one), None) | (None, Some(one)) => one,
        (None, None) => name.text(),
    };
    (label, lang_of(name, default_lang).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cidoc_tei::TeiDocument;

    fn label_of(xml: &str) -> (String, String) {
        let doc = TeiDocument::parse(xml).unwrap();
        entity_label(&doc.root(), "de")
    }

    #[test]
    fn test_surname_forename() {
        assert_eq!(
            label_of("<persName><forename>Hans</forename> <surname>Maier</surname></persName>"),
            ("Maier, Hans".to_string(), "de".to_string())
        );
    }

    #[test]
    fn test_single_part_and_plain_text() {
        assert_eq!(label_of("<persName><surname>Maier</surname></persName>").0, "Maier");
        assert_eq!(
            label_of(r#"<persName xml:lang="en">  Emperor   Franz Joseph </persName>"#),
            ("Emperor Franz Joseph".to_string(), "en".to_string())
        );
    }
}
