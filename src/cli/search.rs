use anyhow::{Context, Result};

use super::display::print_contact_rows;
use super::ui::print_json;
use crate::db::SharedStore;
use crate::models::Contact;

/// Execute the search command
pub async fn run_search(
    store: &SharedStore,
    query: &str,
    case_sensitive: bool,
    json: bool,
) -> Result<()> {
    let results = find_matches(store, query, case_sensitive).await?;

    if json {
        return print_json(&results);
    }
    if results.is_empty() {
        println!("No matches.");
        return Ok(());
    }
    print_contact_rows(&results);
    Ok(())
}

/// The query goes to the store as typed, surrounding spaces included.
async fn find_matches(
    store: &SharedStore,
    query: &str,
    case_sensitive: bool,
) -> Result<Vec<Contact>> {
    let results = if case_sensitive {
        store.search_contacts_case_sensitive(query.to_string()).await
    } else {
        store.search_contacts(query.to_string()).await
    }
    .with_context(|| format!("Search for \"{}\" failed", query))?;

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ContactStore;
    use crate::models::NewContact;

    async fn store_with(names: &[&str]) -> SharedStore {
        let store = SharedStore::new(ContactStore::open_memory().unwrap());
        for name in names {
            store
                .insert_contact(NewContact::new(*name, "000"))
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_search_keeps_surrounding_spaces() {
        let store = store_with(&["Alice", "Mary Alice"]).await;

        let results = find_matches(&store, " Al", false).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Mary Alice");

        let results = find_matches(&store, " Al", true).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Mary Alice");
    }

    #[tokio::test]
    async fn test_search_case_modes() {
        let store = store_with(&["Alice", "Bob"]).await;

        assert_eq!(find_matches(&store, "ali", false).await.unwrap().len(), 1);
        assert!(find_matches(&store, "ali", true).await.unwrap().is_empty());
        assert!(run_search(&store, "Zed", false, false).await.is_ok());
    }
}
