use serde::{Deserialize, Serialize};

/// Photo stored for contacts created without one.
pub const DEFAULT_PHOTO_URI: &str =
    "https://t4.ftcdn.net/jpg/02/29/75/83/360_F_229758328_7x8jwCwjtBMmC6rgFzLFhZoEpLobB6L8.jpg";

/// A stored contact. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub mobile_number: String,
    pub landline_number: Option<String>,
    pub photo: Option<String>,
    pub is_favorite: bool,
}

/// Insert payload. Everything but name and mobile number is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub mobile_number: String,
    pub landline_number: Option<String>,
    pub photo: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl NewContact {
    pub fn new(name: impl Into<String>, mobile_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mobile_number: mobile_number.into(),
            ..Self::default()
        }
    }

    pub fn favorite(mut self) -> Self {
        self.is_favorite = true;
        self
    }

    /// Photo to persist: the given URI, or the placeholder when none was picked.
    pub fn photo_or_default(&self) -> &str {
        match self.photo.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => DEFAULT_PHOTO_URI,
        }
    }
}

impl Contact {
    /// Returns the landline, treating an empty string as absent
    pub fn landline(&self) -> Option<&str> {
        self.landline_number.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_defaults_to_placeholder() {
        let contact = NewContact::new("Alice", "111");
        assert_eq!(contact.photo_or_default(), DEFAULT_PHOTO_URI);

        let mut blank = NewContact::new("Alice", "111");
        blank.photo = Some(String::new());
        assert_eq!(blank.photo_or_default(), DEFAULT_PHOTO_URI);

        let mut picked = NewContact::new("Alice", "111");
        picked.photo = Some("file:///tmp/alice.jpg".to_string());
        assert_eq!(picked.photo_or_default(), "file:///tmp/alice.jpg");
    }

    #[test]
    fn test_new_contact_not_favorite_by_default() {
        assert!(!NewContact::new("Bob", "222").is_favorite);
        assert!(NewContact::new("Bob", "222").favorite().is_favorite);
    }

    #[test]
    fn test_favorite_flag_defaults_when_missing_from_json() {
        let json = r#"{"name":"Carol","mobile_number":"333","landline_number":null,"photo":null}"#;
        let contact: NewContact = serde_json::from_str(json).unwrap();
        assert!(!contact.is_favorite);
    }
}
