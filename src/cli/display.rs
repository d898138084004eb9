use crate::models::{Contact, DEFAULT_PHOTO_URI};

const NAME_WIDTH: usize = 28;

/// One-line summary used by list, favorites and search
pub fn format_contact_row(contact: &Contact) -> String {
    let star = if contact.is_favorite { "*" } else { " " };
    let name = truncate(&contact.name, NAME_WIDTH);
    format!(
        "{:>4} {} {:<width$} {}",
        contact.id,
        star,
        name,
        contact.mobile_number,
        width = NAME_WIDTH
    )
}

pub fn print_contact_rows(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No contacts.");
        return;
    }
    for contact in contacts {
        println!("{}", format_contact_row(contact));
    }
}

/// Print a full contact with clean formatting (only non-empty fields)
pub fn print_full_contact(contact: &Contact) {
    let header = if contact.is_favorite {
        format!("{} *", contact.name)
    } else {
        contact.name.clone()
    };
    println!("{}\n", header);

    println!("  mobile    {}", contact.mobile_number);
    if let Some(landline) = contact.landline() {
        println!("  landline  {}", landline);
    }
    match contact.photo.as_deref() {
        Some(photo) if photo != DEFAULT_PHOTO_URI && !photo.is_empty() => {
            println!("  photo     {}", photo)
        }
        _ => {}
    }
    println!("  id        {}", contact.id);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let text: String = s.chars().take(max - 1).collect();
        format!("{}…", text.trim_end())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, is_favorite: bool) -> Contact {
        Contact {
            id: 3,
            name: name.to_string(),
            mobile_number: "0712345678".to_string(),
            landline_number: None,
            photo: None,
            is_favorite,
        }
    }

    #[test]
    fn test_row_marks_favorites() {
        let row = format_contact_row(&contact("Bob", true));
        assert!(row.starts_with("   3 * Bob"));
        assert!(row.ends_with("0712345678"));

        let row = format_contact_row(&contact("Bob", false));
        assert!(row.starts_with("   3   Bob"));
    }

    #[test]
    fn test_truncate_long_names() {
        let long = "A".repeat(40);
        let t = truncate(&long, 10);
        assert_eq!(t.chars().count(), 10);
        assert!(t.ends_with('…'));
        assert_eq!(truncate("short", 10), "short");
    }
}
