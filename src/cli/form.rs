//! Field state for the add and update flows.
//!
//! The store accepts anything; required-field checks live here.

use anyhow::{anyhow, Result};

use crate::models::{Contact, NewContact};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub mobile_number: String,
    pub landline_number: Option<String>,
    pub photo: Option<String>,
    pub is_favorite: bool,
}

/// Field changes requested for an existing contact. `None` keeps the value.
#[derive(Debug, Clone, Default)]
pub struct FormChanges {
    pub name: Option<String>,
    pub mobile_number: Option<String>,
    pub landline_number: Option<String>,
    pub photo: Option<String>,
    pub is_favorite: Option<bool>,
}

impl FormChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.mobile_number.is_none()
            && self.landline_number.is_none()
            && self.photo.is_none()
            && self.is_favorite.is_none()
    }
}

impl ContactForm {
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            mobile_number: contact.mobile_number.clone(),
            landline_number: contact.landline_number.clone(),
            photo: contact.photo.clone(),
            is_favorite: contact.is_favorite,
        }
    }

    /// Apply changes, returning a description of each one.
    pub fn apply(&mut self, changes: FormChanges) -> Vec<String> {
        let mut applied = Vec::new();

        if let Some(name) = changes.name {
            applied.push(format!("name -> {}", name));
            self.name = name;
        }
        if let Some(mobile) = changes.mobile_number {
            applied.push(format!("mobile -> {}", mobile));
            self.mobile_number = mobile;
        }
        if let Some(landline) = changes.landline_number {
            if landline.trim().is_empty() {
                applied.push("landline cleared".to_string());
                self.landline_number = None;
            } else {
                applied.push(format!("landline -> {}", landline));
                self.landline_number = Some(landline);
            }
        }
        if let Some(photo) = changes.photo {
            applied.push("photo updated".to_string());
            self.photo = Some(photo);
        }
        if let Some(fav) = changes.is_favorite {
            applied.push(if fav { "favorite" } else { "not favorite" }.to_string());
            self.is_favorite = fav;
        }

        applied
    }

    /// Name and mobile number must be present.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.mobile_number.trim().is_empty() {
            return Err(anyhow!("Please enter name and mobile number."));
        }
        Ok(())
    }

    pub fn into_new_contact(self) -> Result<NewContact> {
        self.validate()?;
        Ok(NewContact {
            name: self.name.trim().to_string(),
            mobile_number: self.mobile_number.trim().to_string(),
            landline_number: non_empty(self.landline_number),
            photo: non_empty(self.photo),
            is_favorite: self.is_favorite,
        })
    }

    pub fn into_contact(self, id: i64) -> Result<Contact> {
        self.validate()?;
        Ok(Contact {
            id,
            name: self.name.trim().to_string(),
            mobile_number: self.mobile_number.trim().to_string(),
            landline_number: non_empty(self.landline_number),
            photo: non_empty(self.photo),
            is_favorite: self.is_favorite,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
