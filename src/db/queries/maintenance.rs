use rusqlite::Connection;
use tracing::warn;

/// Rows removed by a wipe, per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearedCounts {
    pub transactions: usize,
    pub snapshots: usize,
    pub pots: usize,
    pub providers: usize,
}

/// Delete every provider, pot, snapshot and transaction in one transaction.
/// Children go first so the wipe works with or without cascading keys.
pub fn clear_all_data(conn: &Connection) -> rusqlite::Result<ClearedCounts> {
    let tx = conn.unchecked_transaction()?;
    let counts = ClearedCounts {
        transactions: tx.execute("DELETE FROM transactions", [])?,
        snapshots: tx.execute("DELETE FROM snapshots", [])?,
        pots: tx.execute("DELETE FROM pots", [])?,
        providers: tx.execute("DELETE FROM providers", [])?,
    };
    tx.commit()?;

    warn!(
        transactions = counts.transactions,
        snapshots = counts.snapshots,
        pots = counts.pots,
        providers = counts.providers,
        "Cleared all data"
    );
    Ok(counts)
}

/// Delete every pot. Their snapshots and transactions cascade with them.
pub fn clear_pots(conn: &Connection) -> rusqlite::Result<usize> {
    let rows = conn.execute("DELETE FROM pots", [])?;
    warn!(count = rows, "Deleted all pots");
    Ok(rows)
}
