use rusqlite::Connection;

use crate::db::queries::{pots, snapshots, transactions};
use crate::error::AppResult;
use crate::models::{Snapshot, Transaction};
use crate::services::report::PotDataSource;

/// Report data read straight from SQLite over one borrowed connection.
pub struct SqlitePotData<'a> {
    conn: &'a Connection,
}

impl<'a> SqlitePotData<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl PotDataSource for SqlitePotData<'_> {
    fn pot_exists(&self, pot_id: i64) -> AppResult<bool> {
        Ok(pots::pot_exists(self.conn, pot_id)?)
    }

    fn snapshots_by_date(&self, pot_id: i64) -> AppResult<Vec<Snapshot>> {
        Ok(snapshots::list_snapshots_for_pot(self.conn, pot_id)?)
    }

    fn transactions_by_date(&self, pot_id: i64) -> AppResult<Vec<Transaction>> {
        Ok(transactions::list_transactions_for_pot(self.conn, pot_id)?)
    }
}
