use rusqlite::{params, Row};
use tracing::debug;

use super::error::{StoreError, StoreResult};
use super::ContactStore;
use crate::models::{Contact, NewContact};

const SELECT_CONTACT: &str =
    "SELECT id, name, mobile_number, landline_number, photo, is_favorite FROM contacts";

impl ContactStore {
    // ==================== CREATE ====================

    /// Insert a contact and return its store-assigned id.
    ///
    /// No field validation happens here; callers check name and mobile number.
    pub fn insert_contact(&self, contact: &NewContact) -> StoreResult<i64> {
        self.conn
            .execute(
                r#"INSERT INTO contacts (
                    name, mobile_number, landline_number, photo, is_favorite
                ) VALUES (?, ?, ?, ?, ?)"#,
                params![
                    contact.name,
                    contact.mobile_number,
                    contact.landline_number,
                    contact.photo_or_default(),
                    contact.is_favorite as i32,
                ],
            )
            .map_err(StoreError::storage("insert contact"))?;

        let id = self.conn.last_insert_rowid();
        debug!(id, "contact inserted");
        Ok(id)
    }

    // ==================== READ ====================

    pub fn get_contact(&self, id: i64) -> StoreResult<Option<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_CONTACT} WHERE id = ?"))
            .map_err(StoreError::storage("get contact"))?;

        match stmt.query_row([id], Self::row_to_contact) {
            Ok(contact) => Ok(Some(contact)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::storage("get contact")(e)),
        }
    }

    /// All contacts ordered by name, ties in insertion order.
    pub fn list_contacts(&self) -> StoreResult<Vec<Contact>> {
        self.query_contacts(
            "list contacts",
            &format!("{SELECT_CONTACT} ORDER BY name ASC, id ASC"),
            [],
        )
    }

    /// Contacts whose name contains `query`, using LIKE semantics (ASCII
    /// case-insensitive). `%` and `_` in the query match literally.
    pub fn search_contacts(&self, query: &str) -> StoreResult<Vec<Contact>> {
        let pattern = format!("%{}%", Self::escape_like(query));
        self.query_contacts(
            "search contacts",
            &format!(
                "{SELECT_CONTACT} WHERE name LIKE ?1 ESCAPE '\\' ORDER BY name ASC, id ASC"
            ),
            [pattern],
        )
    }

    /// Contacts whose name contains `query` exactly, case included.
    pub fn search_contacts_case_sensitive(&self, query: &str) -> StoreResult<Vec<Contact>> {
        if query.is_empty() {
            return self.list_contacts();
        }

        self.query_contacts(
            "search contacts",
            &format!("{SELECT_CONTACT} WHERE instr(name, ?1) > 0 ORDER BY name ASC, id ASC"),
            [query],
        )
    }

    pub fn list_favorite_contacts(&self) -> StoreResult<Vec<Contact>> {
        self.query_contacts(
            "list favorite contacts",
            &format!("{SELECT_CONTACT} WHERE is_favorite = 1 ORDER BY name ASC, id ASC"),
            [],
        )
    }

    fn query_contacts<P: rusqlite::Params>(
        &self,
        op: &'static str,
        sql: &str,
        params: P,
    ) -> StoreResult<Vec<Contact>> {
        let mut stmt = self.conn.prepare(sql).map_err(StoreError::storage(op))?;

        let contacts = stmt
            .query_map(params, Self::row_to_contact)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(StoreError::storage(op))?;

        debug!(op, count = contacts.len(), "contacts fetched");
        Ok(contacts)
    }

    /// Escape LIKE metacharacters (% _ \)
    fn escape_like(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '%' | '_' | '\\' => {
                    result.push('\\');
                    result.push(c);
                }
                _ => result.push(c),
            }
        }
        result
    }

    // ==================== UPDATE ====================

    /// Replace every mutable field of the row with `contact.id`.
    ///
    /// An id with no row is not an error: nothing changes and `Ok` is returned.
    pub fn update_contact(&self, contact: &Contact) -> StoreResult<()> {
        let rows = self
            .conn
            .execute(
                r#"UPDATE contacts SET
                    name = ?, mobile_number = ?, landline_number = ?, photo = ?, is_favorite = ?
                   WHERE id = ?"#,
                params![
                    contact.name,
                    contact.mobile_number,
                    contact.landline_number,
                    contact.photo,
                    contact.is_favorite as i32,
                    contact.id,
                ],
            )
            .map_err(StoreError::storage("update contact"))?;

        debug!(id = contact.id, rows, "contact updated");
        Ok(())
    }

    /// Set only the favorite flag. Same missing-id behavior as `update_contact`.
    pub fn set_favorite(&self, id: i64, is_favorite: bool) -> StoreResult<()> {
        let rows = self
            .conn
            .execute(
                "UPDATE contacts SET is_favorite = ? WHERE id = ?",
                params![is_favorite as i32, id],
            )
            .map_err(StoreError::storage("set favorite"))?;

        debug!(id, is_favorite, rows, "favorite flag set");
        Ok(())
    }

    // ==================== DELETE ====================

    /// Delete the row with `id`. Deleting a missing id succeeds.
    pub fn delete_contact(&self, id: i64) -> StoreResult<()> {
        let rows = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?", [id])
            .map_err(StoreError::storage("delete contact"))?;

        debug!(id, rows, "contact deleted");
        Ok(())
    }

    // ==================== ROW MAPPERS ====================

    fn row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
        Ok(Contact {
            id: row.get("id")?,
            name: row.get("name")?,
            mobile_number: row.get("mobile_number")?,
            landline_number: row.get("landline_number")?,
            photo: row.get("photo")?,
            is_favorite: row.get::<_, i32>("is_favorite")? != 0,
        })
    }
}
