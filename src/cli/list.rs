use anyhow::{Context, Result};

use super::display::print_contact_rows;
use super::ui::print_json;
use crate::db::SharedStore;

/// Execute the list command
pub async fn run_list(store: &SharedStore, json: bool) -> Result<()> {
    let contacts = store
        .list_contacts()
        .await
        .context("Could not load contacts")?;

    if json {
        return print_json(&contacts);
    }
    print_contact_rows(&contacts);
    Ok(())
}

/// Execute the favorites command
pub async fn run_favorites(store: &SharedStore, json: bool) -> Result<()> {
    let contacts = store
        .list_favorite_contacts()
        .await
        .context("Could not load favorite contacts")?;

    if json {
        return print_json(&contacts);
    }
    if contacts.is_empty() {
        println!("No favorites.");
        return Ok(());
    }
    print_contact_rows(&contacts);
    Ok(())
}
