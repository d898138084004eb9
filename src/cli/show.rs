use anyhow::{Context, Result};

use super::display::print_full_contact;
use super::ui::print_json;
use crate::db::SharedStore;

/// Execute the show command
pub async fn run_show(store: &SharedStore, id: i64, json: bool) -> Result<()> {
    let contact = store
        .get_contact(id)
        .await
        .with_context(|| format!("Could not load contact {}", id))?;

    match contact {
        Some(contact) if json => print_json(&contact)?,
        Some(contact) => print_full_contact(&contact),
        None => println!("No contact with id {}.", id),
    }
    Ok(())
}
