use anyhow::{Context, Result};

use super::display::format_contact_row;
use super::ui::confirm;
use crate::db::SharedStore;

/// Execute the delete command
pub async fn run_delete(store: &SharedStore, id: i64, force: bool) -> Result<()> {
    let Some(contact) = store
        .get_contact(id)
        .await
        .with_context(|| format!("Could not load contact {}", id))?
    else {
        println!("No contact with id {}.", id);
        return Ok(());
    };

    println!("{}", format_contact_row(&contact));
    println!();

    if !force && !confirm(&format!("Delete {}?", contact.name))? {
        return Ok(());
    }

    store
        .delete_contact(id)
        .await
        .with_context(|| format!("Failed to delete {}", contact.name))?;

    println!("Deleted.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ContactStore;
    use crate::models::NewContact;

    #[tokio::test]
    async fn test_delete_by_id_force() {
        let store = SharedStore::new(ContactStore::open_memory().unwrap());
        let alice = store
            .insert_contact(NewContact::new("Alice", "111"))
            .await
            .unwrap();
        let bob = store
            .insert_contact(NewContact::new("Bob", "222"))
            .await
            .unwrap();

        run_delete(&store, alice, true).await.unwrap();

        assert!(store.get_contact(alice).await.unwrap().is_none());
        let remaining = store.list_contacts().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, bob);
    }

    #[tokio::test]
    async fn test_delete_missing_id() {
        let store = SharedStore::new(ContactStore::open_memory().unwrap());
        store
            .insert_contact(NewContact::new("Alice", "111"))
            .await
            .unwrap();

        run_delete(&store, 42, true).await.unwrap();
        assert_eq!(store.list_contacts().await.unwrap().len(), 1);
    }
}
