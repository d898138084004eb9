use anyhow::{Context, Result};

use crate::db::SharedStore;

/// Execute the favorite / unfavorite commands
pub async fn run_set_favorite(store: &SharedStore, id: i64, is_favorite: bool) -> Result<()> {
    // The store reports success for unknown ids, so look the contact up first
    let Some(contact) = store
        .get_contact(id)
        .await
        .with_context(|| format!("Could not load contact {}", id))?
    else {
        println!("No contact with id {}.", id);
        return Ok(());
    };

    store
        .set_favorite(id, is_favorite)
        .await
        .with_context(|| format!("Could not update {}", contact.name))?;

    if is_favorite {
        println!("Favorited: {}", contact.name);
    } else {
        println!("Unfavorited: {}", contact.name);
    }
    Ok(())
}
