/*! Field specifications

A field specification tells a dataset how each side of a [Record] is named,
and carries an opaque handler (`F`) per side that downstream consumers use to
process text (tokenization, numericalization...). This crate never looks
into handlers.

Specifications come in two flavours:
- [FieldSpec::Pair]: two handlers, named `src` and `trg`.
- [FieldSpec::Named]: explicit `(name, handler)` entries, in source/target order.

They are resolved once into [Fields] when a dataset is built.
!*/
use crate::error::Error;
use crate::record::Record;

pub const DEFAULT_SOURCE_NAME: &str = "src";
pub const DEFAULT_TARGET_NAME: &str = "trg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec<F> {
    Pair(F, F),
    Named(Vec<(String, F)>),
}

impl<F> FieldSpec<F> {
    /// Resolve into named fields.
    ///
    /// Fails if a [FieldSpec::Named] does not hold exactly two entries.
    pub fn resolve(self) -> Result<Fields<F>, Error> {
        match self {
            FieldSpec::Pair(src, trg) => Ok(Fields {
                source: (DEFAULT_SOURCE_NAME.to_string(), src),
                target: (DEFAULT_TARGET_NAME.to_string(), trg),
            }),
            FieldSpec::Named(named) => {
                let [source, target]: [(String, F); 2] =
                    named.try_into().map_err(|named: Vec<(String, F)>| {
                        Error::FieldSpec(format!("expected 2 named fields, got {}", named.len()))
                    })?;
                Ok(Fields { source, target })
            }
        }
    }
}

impl FieldSpec<()> {
    /// Handler-less specification with default names.
    pub fn names_only() -> Self {
        FieldSpec::Pair((), ())
    }
}

/// Resolved field specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields<F> {
    source: (String, F),
    target: (String, F),
}

impl<F> Fields<F> {
    pub fn source_name(&self) -> &str {
        &self.source.0
    }

    pub fn target_name(&self) -> &str {
        &self.target.0
    }

    /// `(name, handler)` of both sides, source first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &F)> {
        [&self.source, &self.target]
            .into_iter()
            .map(|(name, handler)| (name.as_str(), handler))
    }

    /// Get the side of `record` tagged with `name`.
    pub fn get<'r>(&self, record: &'r Record, name: &str) -> Option<&'r str> {
        if name == self.source_name() {
            Some(record.source())
        } else if name == self.target_name() {
            Some(record.target())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_defaults() {
        let fields = FieldSpec::Pair(1, 2).resolve().unwrap();
        assert_eq!(fields.source_name(), "src");
        assert_eq!(fields.target_name(), "trg");
        let entries: Vec<(&str, &i32)> = fields.iter().collect();
        assert_eq!(entries, vec![("src", &1), ("trg", &2)]);
    }

    #[test]
    fn named() {
        let spec = FieldSpec::Named(vec![("en".to_string(), ()), ("de".to_string(), ())]);
        let fields = spec.resolve().unwrap();
        assert_eq!(fields.source_name(), "en");
        assert_eq!(fields.target_name(), "de");
    }

    #[test]
    fn named_wrong_count() {
        let spec = FieldSpec::Named(vec![("en".to_string(), ())]);
        assert!(matches!(spec.resolve(), Err(Error::FieldSpec(_))));

        let spec: FieldSpec<()> = FieldSpec::Named(vec![]);
        assert!(spec.resolve().is_err());
    }

    #[test]
    fn get_by_name() {
        let fields = FieldSpec::names_only().resolve().unwrap();
        let record = Record::new("hello".to_string(), "bonjour".to_string());
        assert_eq!(fields.get(&record, "src"), Some("hello"));
        assert_eq!(fields.get(&record, "trg"), Some("bonjour"));
        assert_eq!(fields.get(&record, "other"), None);
    }
}
