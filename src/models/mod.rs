mod contact;

pub use contact::{Contact, NewContact, DEFAULT_PHOTO_URI};
