//! Sibling Positioning
//!
//! The only code that writes the `position` column. Every helper expects to
//! run inside the caller's transaction, so a failed write leaves no trace.
//! After any helper that writes, the siblings of the scope hold exactly the
//! positions `0..n`.

use rusqlite::{params, Connection};
use std::collections::HashSet;

use crate::domain::{DomainError, DomainResult};

/// A table whose rows are ranked per parent scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Siblings {
    /// Lists, ranked per owner
    Lists,
    /// Todos, ranked per list
    Todos,
}

impl Siblings {
    fn table(self) -> &'static str {
        match self {
            Siblings::Lists => "todo_lists",
            Siblings::Todos => "todos",
        }
    }

    fn scope_column(self) -> &'static str {
        match self {
            Siblings::Lists => "owner_id",
            Siblings::Todos => "list_id",
        }
    }
}

/// What a reposition request ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositionOutcome {
    Unchanged { index: usize },
    Moved { from: usize, to: usize },
}

/// Clamp a requested index into `[0, len - 1]`
pub(crate) fn clamp_index(requested: i64, len: usize) -> usize {
    if len == 0 || requested <= 0 {
        return 0;
    }
    let last = len - 1;
    usize::try_from(requested).map_or(last, |i| i.min(last))
}

/// Sibling ids in display order. `id` breaks ties so the order is total
/// even on rows written before the invariant held.
pub(crate) fn ordered_ids(conn: &Connection, siblings: Siblings, scope: &str) -> DomainResult<Vec<String>> {
    let sql = format!(
        "SELECT id FROM {} WHERE {} = ?1 ORDER BY position, id",
        siblings.table(),
        siblings.scope_column()
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let ids = stmt
        .query_map(params![scope], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ids)
}

/// Position for a new sibling appended at the end
pub(crate) fn next_position(conn: &Connection, siblings: Siblings, scope: &str) -> DomainResult<i64> {
    let sql = format!(
        "SELECT COUNT(*) FROM {} WHERE {} = ?1",
        siblings.table(),
        siblings.scope_column()
    );
    let count: i64 = conn.query_row(&sql, params![scope], |row| row.get(0))?;
    Ok(count)
}

/// Store `ids` as positions `0..n`, touching only rows whose position changes.
/// Returns the number of rows rewritten.
fn write_order(conn: &Connection, siblings: Siblings, ids: &[String]) -> DomainResult<usize> {
    let sql = format!(
        "UPDATE {} SET position = ?1 WHERE id = ?2 AND position != ?1",
        siblings.table()
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let mut changed = 0;
    for (index, id) in ids.iter().enumerate() {
        let position = i64::try_from(index).map_err(|e| DomainError::Internal(e.to_string()))?;
        changed += stmt.execute(params![position, id])?;
    }
    Ok(changed)
}

/// Close any gaps left in the scope, keeping the current relative order
pub(crate) fn renumber(conn: &Connection, siblings: Siblings, scope: &str) -> DomainResult<usize> {
    let ids = ordered_ids(conn, siblings, scope)?;
    write_order(conn, siblings, &ids)
}

/// Move `id` to `requested` within its scope.
///
/// Siblings strictly between the old and new index shift by one towards the
/// old slot; the requested index is clamped to the valid range.
pub(crate) fn move_within(
    conn: &Connection,
    siblings: Siblings,
    scope: &str,
    id: &str,
    requested: i64,
) -> DomainResult<RepositionOutcome> {
    let mut ids = ordered_ids(conn, siblings, scope)?;
    let from = ids
        .iter()
        .position(|sibling| sibling == id)
        .ok_or_else(|| DomainError::not_found(format!("{} in scope", id)))?;
    let to = clamp_index(requested, ids.len());

    if from == to {
        return Ok(RepositionOutcome::Unchanged { index: from });
    }

    let moved = ids.remove(from);
    ids.insert(to, moved);
    let changed = write_order(conn, siblings, &ids)?;
    log::debug!(
        "{} {} moved {} -> {} ({} rows rewritten)",
        siblings.table(),
        id,
        from,
        to,
        changed
    );

    Ok(RepositionOutcome::Moved { from, to })
}

/// Rewrite the whole scope from a client-supplied id sequence.
///
/// Ids not in the scope and repeats are ignored; siblings the client did not
/// mention keep their relative order after the supplied ones.
pub(crate) fn apply_order(
    conn: &Connection,
    siblings: Siblings,
    scope: &str,
    requested: &[String],
) -> DomainResult<usize> {
    let current = ordered_ids(conn, siblings, scope)?;
    let known: HashSet<&str> = current.iter().map(String::as_str).collect();

    let mut seen: HashSet<&str> = HashSet::with_capacity(current.len());
    let mut order: Vec<String> = Vec::with_capacity(current.len());
    for id in requested {
        if known.contains(id.as_str()) && seen.insert(id.as_str()) {
            order.push(id.clone());
        }
    }
    for id in &current {
        if !seen.contains(id.as_str()) {
            order.push(id.clone());
        }
    }

    write_order(conn, siblings, &order)
}
