//! Annotations: non-logical metadata attached to axioms.
//!
//! Annotations are kept in a [`BTreeSet`], so insertion order is irrelevant
//! and value-equal annotations collapse to one.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::iri::Iri;

/// The set of annotations carried by an axiom.
pub type Annotations = BTreeSet<Annotation>;

/// The value side of an annotation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnnotationValue {
    /// An IRI reference.
    Iri(Iri),
    /// A string literal, optionally language-tagged.
    Literal {
        /// Lexical form.
        value: String,
        /// Language tag such as `"en"`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
    },
}

/// An annotation property paired with its value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Annotation {
    /// Annotation property IRI (e.g. `rdfs:comment`).
    pub property: Iri,
    /// Annotation value.
    pub value: AnnotationValue,
}

impl Annotation {
    /// Creates an annotation with a plain string literal value.
    #[must_use]
    pub fn literal(property: impl Into<Iri>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: AnnotationValue::Literal {
                value: value.into(),
                lang: None,
            },
        }
    }

    /// Creates an annotation with a language-tagged literal value.
    #[must_use]
    pub fn lang_literal(
        property: impl Into<Iri>,
        value: impl Into<String>,
        lang: impl Into<String>,
    ) -> Self {
        Self {
            property: property.into(),
            value: AnnotationValue::Literal {
                value: value.into(),
                lang: Some(lang.into()),
            },
        }
    }

    /// Creates an annotation whose value is an IRI.
    #[must_use]
    pub fn iri(property: impl Into<Iri>, value: impl Into<Iri>) -> Self {
        Self {
            property: property.into(),
            value: AnnotationValue::Iri(value.into()),
        }
    }
}

/// Renders `Annotation(<property> value)` in OWL functional syntax.
impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Annotation(<{}> ", self.property)?;
        match &self.value {
            AnnotationValue::Iri(iri) => write!(f, "<{iri}>")?,
            AnnotationValue::Literal { value, lang } => {
                write!(f, "\"{}\"", escape_literal(value))?;
                if let Some(lang) = lang {
                    write!(f, "@{lang}")?;
                }
            }
        }
        f.write_str(")")
    }
}

/// Union of two annotation sets.
#[must_use]
pub fn merge_annotations(base: &Annotations, extra: impl IntoIterator<Item = Annotation>) -> Annotations {
    let mut merged = base.clone();
    merged.extend(extra);
    merged
}

pub(crate) fn escape_literal(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iri::iris::{RDFS_COMMENT, RDFS_LABEL};

    #[test]
    fn merge_is_union() {
        let base: Annotations = [Annotation::literal(RDFS_LABEL, "x")].into_iter().collect();
        let merged = merge_annotations(
            &base,
            [
                Annotation::literal(RDFS_LABEL, "x"),
                Annotation::literal(RDFS_COMMENT, "y"),
            ],
        );
        assert_eq!(merged.len(), 2);
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn renders_lang_literal() {
        let ann = Annotation::lang_literal(RDFS_LABEL, "say \"hi\"", "en");
        assert_eq!(
            ann.to_string(),
            format!("Annotation(<{RDFS_LABEL}> \"say \\\"hi\\\"\"@en)")
        );
    }

    #[test]
    fn escapes_line_breaks() {
        assert_eq!(escape_literal("a\r\nb"), "a\\r\\nb");
        assert!(!escape_literal("x\ry").contains('\r'));
    }
}
