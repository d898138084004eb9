use anyhow::{Context, Result};

use super::form::ContactForm;
use super::ui::{confirm, prompt_field, FormResult};
use super::AddArgs;
use crate::db::SharedStore;

/// Execute the add command
pub async fn run_add(store: &SharedStore, args: AddArgs) -> Result<()> {
    // If no options provided, run interactive mode
    let all_none = args.name.is_none()
        && args.mobile.is_none()
        && args.landline.is_none()
        && args.photo.is_none()
        && !args.favorite;

    let form = if all_none {
        match interactive_mode()? {
            Some(form) => form,
            None => {
                println!("Cancelled.");
                return Ok(());
            }
        }
    } else {
        ContactForm {
            name: args.name.unwrap_or_default(),
            mobile_number: args.mobile.unwrap_or_default(),
            landline_number: args.landline,
            photo: args.photo,
            is_favorite: args.favorite,
        }
    };

    let new_contact = form.into_new_contact()?;
    let name = new_contact.name.clone();

    let id = store
        .insert_contact(new_contact)
        .await
        .with_context(|| format!("Could not save {}", name))?;

    println!("\nCreated: {} (id {})", name, id);
    Ok(())
}

fn interactive_mode() -> Result<Option<ContactForm>> {
    let Some(name) = ask("name")? else { return Ok(None) };
    let Some(mobile_number) = ask("mobile")? else { return Ok(None) };
    let Some(landline) = ask("landline")? else { return Ok(None) };
    let Some(photo) = ask("photo")? else { return Ok(None) };
    let is_favorite = confirm("favorite?")?;

    Ok(Some(ContactForm {
        name,
        mobile_number,
        landline_number: Some(landline).filter(|s| !s.is_empty()),
        photo: Some(photo).filter(|s| !s.is_empty()),
        is_favorite,
    }))
}

fn ask(label: &str) -> Result<Option<String>> {
    Ok(match prompt_field(label)? {
        FormResult::Value(v) => Some(v),
        FormResult::Cancelled => None,
    })
}
