use crate::db::queries::get_decimal;
use crate::models::{NewSnapshot, Snapshot};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::info;

fn snapshot_from_row(row: &Row) -> rusqlite::Result<Snapshot> {
    Ok(Snapshot {
        id: row.get(0)?,
        pot_id: row.get(1)?,
        date: row.get(2)?,
        balance: get_decimal(row, 3)?,
        source: row.get(4)?,
        note: row.get(5)?,
    })
}

/// All snapshots of a pot, oldest first. Same-day rows keep insertion order.
pub fn list_snapshots_for_pot(conn: &Connection, pot_id: i64) -> rusqlite::Result<Vec<Snapshot>> {
    let mut stmt = conn.prepare(
        "SELECT id, pot_id, date, balance, source, note
         FROM snapshots
         WHERE pot_id = ?
         ORDER BY date, id",
    )?;
    let snapshots = stmt
        .query_map([pot_id], snapshot_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(snapshots)
}

pub fn get_snapshot(conn: &Connection, id: i64) -> rusqlite::Result<Option<Snapshot>> {
    conn.query_row(
        "SELECT id, pot_id, date, balance, source, note FROM snapshots WHERE id = ?",
        [id],
        snapshot_from_row,
    )
    .optional()
}

pub fn create_snapshot(conn: &Connection, snapshot: &NewSnapshot) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO snapshots (pot_id, date, balance, source, note) VALUES (?, ?, ?, ?, ?)",
        params![
            snapshot.pot_id,
            snapshot.date,
            snapshot.balance.to_string(),
            snapshot.source,
            snapshot.note,
        ],
    )?;
    let id = conn.last_insert_rowid();
    info!(
        snapshot_id = id,
        pot_id = snapshot.pot_id,
        date = %snapshot.date,
        "Created snapshot"
    );
    Ok(id)
}
