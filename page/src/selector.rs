use crate::Element;

/// The selector subset the fallback resolves.
///
/// Combinators, attribute selectors, and pseudo classes are not part of the
/// emulated surface; anything outside this subset parses to `None` and is
/// treated as matching nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Universal,
    Id(String),
    Class(String),
    Tag(String),
    TagClass { tag: String, class: String },
}

impl Selector {
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text == "*" {
            return Some(Selector::Universal);
        }
        if let Some(id) = text.strip_prefix('#') {
            return is_identifier(id).then(|| Selector::Id(id.into()));
        }
        if let Some(class) = text.strip_prefix('.') {
            return is_identifier(class).then(|| Selector::Class(class.into()));
        }
        if let Some((tag, class)) = text.split_once('.') {
            return (is_identifier(tag) && is_identifier(class)).then(|| Selector::TagClass {
                tag: tag.into(),
                class: class.into(),
            });
        }
        is_identifier(text).then(|| Selector::Tag(text.into()))
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Universal => true,
            Selector::Id(id) => element.id_attribute().as_deref() == Some(id),
            Selector::Class(class) => element.has_class(class),
            Selector::Tag(tag) => element.tag() == tag,
            Selector::TagClass { tag, class } => {
                element.tag() == tag && element.has_class(class)
            }
        }
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '-')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::Selector;
    use crate::Document;

    #[test]
    fn parses_the_supported_subset() {
        assert_eq!(Selector::parse("*"), Some(Selector::Universal));
        assert_eq!(Selector::parse("#banner"), Some(Selector::Id("banner".into())));
        assert_eq!(Selector::parse(".card"), Some(Selector::Class("card".into())));
        assert_eq!(Selector::parse("div"), Some(Selector::Tag("div".into())));
        assert_eq!(
            Selector::parse("div.card"),
            Some(Selector::TagClass {
                tag: "div".into(),
                class: "card".into()
            })
        );
    }

    #[test]
    fn rejects_everything_else() {
        for selector in ["", "#", ".", "div > span", "a, b", "[draggable]", "#a b", "1div"] {
            assert_eq!(Selector::parse(selector), None, "{selector}");
        }
    }

    #[test]
    fn matches_against_elements() {
        let document = Document::new();
        let element = document
            .create_element("div")
            .with_id("banner")
            .with_class("card");

        assert!(Selector::parse("*").unwrap().matches(&element));
        assert!(Selector::parse("#banner").unwrap().matches(&element));
        assert!(Selector::parse(".card").unwrap().matches(&element));
        assert!(Selector::parse("div.card").unwrap().matches(&element));
        assert!(!Selector::parse("#card").unwrap().matches(&element));
        assert!(!Selector::parse("span.card").unwrap().matches(&element));
    }
}
