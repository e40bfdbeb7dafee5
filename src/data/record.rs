//! Single scoring record entered field by field

use crate::error::{Error, Result};
use crate::schema::FieldKind;

/// Feature name to value mapping that keeps insertion order.
///
/// May lack schema features or carry extra ones; alignment reconciles both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputRecord {
    entries: Vec<(String, f64)>,
}

impl InputRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name`, replacing an earlier value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`InputRecord::insert`].
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse raw `(name, value)` entries, validating each by its [`FieldKind`].
    pub fn parse_entries<I, N, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: AsRef<str>,
    {
        let mut record = Self::new();
        for (name, raw) in entries {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(Error::invalid_input("<unnamed>", "feature name must not be blank"));
            }
            let value = FieldKind::for_feature(name).parse(name, raw.as_ref())?;
            record.insert(name, value);
        }
        Ok(record)
    }

    /// Parse `NAME=VALUE` assignments as typed on a command line.
    pub fn parse_assignments<I, S>(assignments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pairs = assignments
            .into_iter()
            .map(|a| {
                let a = a.as_ref();
                a.split_once('=')
                    .map(|(n, v)| (n.to_string(), v.to_string()))
                    .ok_or_else(|| Error::invalid_input(a, "expected NAME=VALUE"))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::parse_entries(pairs)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for InputRecord {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let record = InputRecord::new()
            .with("ODInterest", 1.0)
            .with("ODPrincipal", 2.0)
            .with("ODInterest", 3.0);
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("ODInterest"), Some(3.0));
        assert_eq!(record.names().collect::<Vec<_>>(), vec!["ODInterest", "ODPrincipal"]);
    }

    #[test]
    fn test_parse_entries_validates_integer_fields() {
        let err = InputRecord::parse_entries([("NoOfArrearDays", "2.5")]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { ref field, .. } if field == "NoOfArrearDays"));

        let record = InputRecord::parse_entries([("NoOfArrearDays", "12"), ("LoanTerm", "50")]).unwrap();
        assert_eq!(record.get("NoOfArrearDays"), Some(12.0));
        assert_eq!(record.get("LoanTerm"), Some(50.0));
    }

    #[test]
    fn test_parse_entries_enforces_minimum() {
        let err = InputRecord::parse_entries([("ODInterest", "-0.01")]).unwrap_err();
        assert!(err.to_string().contains("minimum of 0"));
    }

    #[test]
    fn test_parse_entries_accepts_floats() {
        let record = InputRecord::parse_entries([("ODInterest", " 50.25 ")]).unwrap();
        assert_eq!(record.get("ODInterest"), Some(50.25));
    }

    #[test]
    fn test_parse_assignments() {
        let record = InputRecord::parse_assignments(["ODInterest=50", "NoOfArrearDays=3"]).unwrap();
        assert_eq!(record.get("ODInterest"), Some(50.0));
        assert_eq!(record.get("NoOfArrearDays"), Some(3.0));

        assert!(InputRecord::parse_assignments(["ODInterest"]).is_err());
        assert!(InputRecord::parse_assignments(["=5"]).is_err());
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(InputRecord::parse_entries([("PrincipalDue", "abc")]).is_err());
        assert!(InputRecord::parse_entries([("PrincipalDue", "NaN")]).is_err());
    }
}
