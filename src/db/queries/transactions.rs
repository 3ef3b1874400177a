use crate::db::queries::{get_decimal, get_parsed};
use crate::models::{NewTransaction, Transaction};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::info;

fn transaction_from_row(row: &Row) -> rusqlite::Result<Transaction> {
    Ok(Transaction {
        id: row.get(0)?,
        pot_id: row.get(1)?,
        date: row.get(2)?,
        transaction_type: get_parsed(row, 3)?,
        amount: get_decimal(row, 4)?,
        note: row.get(5)?,
    })
}

/// All transactions of a pot, oldest first. Same-day rows keep insertion order.
pub fn list_transactions_for_pot(
    conn: &Connection,
    pot_id: i64,
) -> rusqlite::Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, pot_id, date, type, amount, note
         FROM transactions
         WHERE pot_id = ?
         ORDER BY date, id",
    )?;
    let transactions = stmt
        .query_map([pot_id], transaction_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(transactions)
}

pub fn get_transaction(conn: &Connection, id: i64) -> rusqlite::Result<Option<Transaction>> {
    conn.query_row(
        "SELECT id, pot_id, date, type, amount, note FROM transactions WHERE id = ?",
        [id],
        transaction_from_row,
    )
    .optional()
}

pub fn create_transaction(conn: &Connection, tx: &NewTransaction) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO transactions (pot_id, date, type, amount, note) VALUES (?, ?, ?, ?, ?)",
        params![
            tx.pot_id,
            tx.date,
            tx.transaction_type.as_str(),
            tx.amount.to_string(),
            tx.note,
        ],
    )?;
    let id = conn.last_insert_rowid();
    info!(
        transaction_id = id,
        pot_id = tx.pot_id,
        transaction_type = %tx.transaction_type,
        "Created transaction"
    );
    Ok(id)
}
