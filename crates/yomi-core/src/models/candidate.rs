use serde::{Deserialize, Serialize};

/// A bare name analyzed outside of any catalog entity.
///
/// An empty name counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCandidate {
    pub name: String,
    pub reading: Option<String>,
    pub sort: Option<String>,
}

impl SortCandidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_plain_string() {
        let candidate = SortCandidate::new("奥田民生").with_sort("オクダ");
        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["name"], "奥田民生");
        assert_eq!(json["reading"], serde_json::Value::Null);

        assert_eq!(SortCandidate::default().name, "");
    }
}
