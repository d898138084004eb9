use anyhow::{anyhow, Context, Result};

use super::form::{ContactForm, FormChanges};
use super::UpdateArgs;
use crate::db::SharedStore;

/// Execute the update command
pub async fn run_update(store: &SharedStore, args: UpdateArgs) -> Result<()> {
    let id = args.id;
    let changes = changes_from_args(args);

    if changes.is_empty() {
        return Err(anyhow!(
            "No updates provided. Use -n, -m, -l, -p, --favorite or --no-favorite."
        ));
    }

    // Update of an unknown id succeeds silently in the store, so check first
    let Some(contact) = store
        .get_contact(id)
        .await
        .with_context(|| format!("Could not load contact {}", id))?
    else {
        println!("No contact with id {}.", id);
        return Ok(());
    };

    let mut form = ContactForm::from_contact(&contact);
    let applied = form.apply(changes);
    let updated = form.into_contact(contact.id)?;

    store
        .update_contact(updated.clone())
        .await
        .with_context(|| format!("Could not update {}", contact.name))?;

    println!("Updated: {}", updated.name);
    for change in applied {
        println!("  {}", change);
    }
    Ok(())
}

fn changes_from_args(args: UpdateArgs) -> FormChanges {
    let is_favorite = match (args.favorite, args.no_favorite) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };

    FormChanges {
        name: args.name,
        mobile_number: args.mobile,
        landline_number: args.landline,
        photo: args.photo,
        is_favorite,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ContactStore;
    use crate::models::NewContact;

    fn args(id: i64) -> UpdateArgs {
        UpdateArgs {
            id,
            name: None,
            mobile: None,
            landline: None,
            photo: None,
            favorite: false,
            no_favorite: false,
        }
    }

    #[test]
    fn test_no_flags_means_no_changes() {
        assert!(changes_from_args(args(1)).is_empty());
    }

    #[test]
    fn test_favorite_flags() {
        let mut a = args(1);
        a.favorite = true;
        assert_eq!(changes_from_args(a).is_favorite, Some(true));

        let mut a = args(1);
        a.no_favorite = true;
        assert_eq!(changes_from_args(a).is_favorite, Some(false));
    }

    async fn store_with_contacts() -> (SharedStore, i64, i64) {
        let store = SharedStore::new(ContactStore::open_memory().unwrap());
        let mut alice = NewContact::new("Alice", "111");
        alice.landline_number = Some("555".to_string());
        let alice = store.insert_contact(alice).await.unwrap();
        let bob = store
            .insert_contact(NewContact::new("Bob", "222"))
            .await
            .unwrap();
        (store, alice, bob)
    }

    #[tokio::test]
    async fn test_update_applies_only_given_fields() {
        let (store, alice, bob) = store_with_contacts().await;
        let bob_before = store.get_contact(bob).await.unwrap().unwrap();

        let mut a = args(alice);
        a.mobile = Some("999".to_string());
        a.favorite = true;
        run_update(&store, a).await.unwrap();

        let updated = store.get_contact(alice).await.unwrap().unwrap();
        assert_eq!(updated.name, "Alice");
        assert_eq!(updated.mobile_number, "999");
        assert_eq!(updated.landline_number.as_deref(), Some("555"));
        assert!(updated.is_favorite);
        assert_eq!(store.get_contact(bob).await.unwrap().unwrap(), bob_before);
    }

    #[tokio::test]
    async fn test_update_missing_id_writes_nothing() {
        let (store, _, _) = store_with_contacts().await;
        let before = store.list_contacts().await.unwrap();

        let mut a = args(999);
        a.name = Some("Ghost".to_string());
        run_update(&store, a).await.unwrap();

        assert_eq!(store.list_contacts().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_rejects_blank_name() {
        let (store, alice, _) = store_with_contacts().await;

        let mut a = args(alice);
        a.name = Some(" ".to_string());
        assert!(run_update(&store, a).await.is_err());

        let unchanged = store.get_contact(alice).await.unwrap().unwrap();
        assert_eq!(unchanged.name, "Alice");
    }

    #[tokio::test]
    async fn test_update_without_flags_is_error() {
        let (store, alice, _) = store_with_contacts().await;
        assert!(run_update(&store, args(alice)).await.is_err());
    }
}
