// Inventory module: the in-memory state behind the menus. It is
// intentionally small and synchronous; everything lives in one `Session`
// value that the UI owns for the lifetime of the process.

use anyhow::{bail, Result};

/// Access level of a credential. Admin gets the full menu; Standard is
/// limited to viewing items and the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Standard,
}

/// One entry of the fixed login list. Credentials are compared exactly
/// (case-sensitive) and are never mutated after session construction.
#[derive(Clone, Debug)]
pub struct Credential {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// A tracked electronic-waste record. Items are appended by the add
/// operation and mutated in place by recycle/schedule; nothing deletes
/// them. Lookup by name is case-insensitive and first-match-wins, and
/// names are not required to be unique.
#[derive(Clone, Debug)]
pub struct Item {
    pub name: String,
    pub category: String,
    pub years_in_use: u32,
    pub recycled: bool,
    pub collection_date: String,
}

impl Item {
    fn new(name: &str, category: &str, years_in_use: u32) -> Self {
        Item {
            name: name.to_string(),
            category: category.to_string(),
            years_in_use,
            recycled: false,
            collection_date: "Not Scheduled".to_string(),
        }
    }
}

/// Summary counters produced by the report operation. Invariant:
/// `total == recycled + pending`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub total: usize,
    pub recycled: usize,
    pub pending: usize,
}

/// The whole program state: the fixed credential list, the ordered item
/// list (insertion order, reordered only by `sort_by_years`) and the
/// currently authenticated user, if any.
pub struct Session {
    credentials: Vec<Credential>,
    items: Vec<Item>,
    current_user: Option<Credential>,
}

impl Session {
    /// Create a session with the two built-in accounts: `admin`/`admin123`
    /// (Admin) and `user`/`user123` (Standard). There is no configuration
    /// surface; the credential list is fixed at construction.
    pub fn new() -> Self {
        Session {
            credentials: vec![
                Credential {
                    username: "admin".to_string(),
                    password: "admin123".to_string(),
                    role: Role::Admin,
                },
                Credential {
                    username: "user".to_string(),
                    password: "user123".to_string(),
                    role: Role::Standard,
                },
            ],
            items: Vec::new(),
            current_user: None,
        }
    }

    /// Check the given pair against the credential list. An exact match
    /// binds the session's current user and returns a copy of the matched
    /// credential; anything else is an error and leaves the session
    /// unauthenticated. No retry or lockout logic lives here.
    pub fn login(&mut self, username: &str, password: &str) -> Result<Credential> {
        for cred in &self.credentials {
            if cred.username == username && cred.password == password {
                self.current_user = Some(cred.clone());
                return Ok(cred.clone());
            }
        }
        bail!("Invalid credentials.")
    }

    /// The credential bound by a successful `login`, if any.
    pub fn current_user(&self) -> Option<&Credential> {
        self.current_user.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in current list order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Append a new item. Fresh items start unrecycled with the
    /// collection date placeholder "Not Scheduled". Duplicated names are
    /// accepted; later lookups act on the first match in list order.
    pub fn add_item(&mut self, name: &str, category: &str, years_in_use: u32) {
        self.items.push(Item::new(name, category, years_in_use));
    }

    /// Reorder the stored list ascending by years in use. The sort is
    /// stable, so items with equal years keep their prior relative order.
    /// The new order is permanent until the next sort.
    pub fn sort_by_years(&mut self) {
        self.items.sort_by_key(|item| item.years_in_use);
    }

    /// Items whose category matches `category` case-insensitively, in
    /// current list order. Does not mutate the list.
    pub fn items_by_category(&self, category: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Whether any item's name matches `name` case-insensitively.
    pub fn contains(&self, name: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.name.eq_ignore_ascii_case(name))
    }

    /// Mark the first item recycled whose name matches case-insensitively
    /// AND whose recycled flag is still false; a matching name that is
    /// already recycled is skipped, not a hit. The transition is one-way.
    /// Errors when no item qualifies, leaving the list untouched.
    pub fn recycle(&mut self, name: &str) -> Result<()> {
        for item in &mut self.items {
            if item.name.eq_ignore_ascii_case(name) && !item.recycled {
                item.recycled = true;
                return Ok(());
            }
        }
        bail!("Item not found or already recycled.")
    }

    /// Overwrite the collection date of the first item whose name matches
    /// case-insensitively. Scheduling the same name again replaces the
    /// previous date; the date string itself is not validated.
    pub fn schedule(&mut self, name: &str, date: &str) -> Result<()> {
        for item in &mut self.items {
            if item.name.eq_ignore_ascii_case(name) {
                item.collection_date = date.to_string();
                return Ok(());
            }
        }
        bail!("Item not found.")
    }

    /// Count totals in a single pass. `None` when the list is empty: the
    /// caller reports "no items" instead of a zero-filled summary.
    pub fn report(&self) -> Option<Report> {
        if self.items.is_empty() {
            return None;
        }
        let total = self.items.len();
        let recycled = self.items.iter().filter(|item| item.recycled).count();
        Some(Report {
            total,
            recycled,
            pending: total - recycled,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
