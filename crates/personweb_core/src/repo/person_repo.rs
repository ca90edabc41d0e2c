//! Person repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `people` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - The store assigns `id` exactly once, at insert, and never rewrites it.
//! - Every write runs in its own transaction; a failure at begin, prepare
//!   or execute abandons the transaction without committing.
//! - Update/Delete do not inspect the affected-row count: a write against
//!   an absent id executes cleanly and reports success.
//! - "No rows" is an empty result, never an error.

use crate::model::person::{Person, PersonId};
use rusqlite::{params, Connection, Params, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PERSON_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    email,
    ip_address
FROM people";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for person persistence and query operations.
///
/// The read path and the write path fail differently for callers: a failed
/// read returned no data, a failed write left no mutation behind. The two
/// variants keep that distinction visible in the return contract.
#[derive(Debug)]
pub enum RepoError {
    /// A read failed during statement preparation, execution or row
    /// iteration. No partial results were returned.
    Query(rusqlite::Error),
    /// A write failed before commit. The transaction was abandoned and no
    /// mutation is visible.
    Write(rusqlite::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Query(err) => write!(f, "query failed: {err}"),
            Self::Write(err) => write!(f, "write failed: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Query(err) => Some(err),
            Self::Write(err) => Some(err),
        }
    }
}

/// Repository interface for person CRUD operations.
pub trait PersonRepository {
    /// Lists up to `limit` records ordered by id ascending.
    ///
    /// The limit is applied literally; clamping to a policy maximum is the
    /// caller's responsibility. An empty table yields an empty vec.
    fn list_persons(&self, limit: u32) -> RepoResult<Vec<Person>>;

    /// Range scan: up to `count` records whose id is greater than or equal
    /// to `id`, ordered by id ascending. No matching row yields an empty
    /// vec, not an error.
    fn get_persons_from_id(&self, id: PersonId, count: u32) -> RepoResult<Vec<Person>>;

    /// Inserts a record and returns the store-assigned id.
    ///
    /// Any id carried by `person` is ignored.
    fn add_person(&self, person: &Person) -> RepoResult<PersonId>;

    /// Rewrites every field except `id` for the row matching `id`.
    fn update_person(&self, person: &Person, id: PersonId) -> RepoResult<()>;

    /// Removes the row matching `id`.
    fn delete_person(&self, id: PersonId) -> RepoResult<()>;
}

/// SQLite-backed person repository.
///
/// Borrows the single shared connection opened at startup; reads run
/// outside explicit transactions, writes each open one.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Runs one write statement inside a scoped transaction.
    ///
    /// Begin, prepare, execute, commit; any failure before commit drops the
    /// transaction unfinished, which rolls it back. Commit is unconditional
    /// once execution succeeds; the affected-row count is not inspected.
    /// Returns the last-insert rowid observed inside the transaction, which
    /// is meaningful only after an INSERT.
    fn execute_write<P: Params>(&self, sql: &str, params: P) -> RepoResult<PersonId> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(RepoError::Write)?;
        {
            let mut stmt = tx.prepare(sql).map_err(RepoError::Write)?;
            stmt.execute(params).map_err(RepoError::Write)?;
        }
        let row_id = tx.last_insert_rowid();
        tx.commit().map_err(RepoError::Write)?;
        Ok(row_id)
    }

    fn query_persons<P: Params>(&self, sql: &str, params: P) -> RepoResult<Vec<Person>> {
        let mut stmt = self.conn.prepare(sql).map_err(RepoError::Query)?;
        let mut rows = stmt.query(params).map_err(RepoError::Query)?;
        let mut persons = Vec::new();

        while let Some(row) = rows.next().map_err(RepoError::Query)? {
            persons.push(parse_person_row(row).map_err(RepoError::Query)?);
        }

        Ok(persons)
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn list_persons(&self, limit: u32) -> RepoResult<Vec<Person>> {
        self.query_persons(
            &format!("{PERSON_SELECT_SQL} ORDER BY id ASC LIMIT ?1;"),
            params![i64::from(limit)],
        )
    }

    fn get_persons_from_id(&self, id: PersonId, count: u32) -> RepoResult<Vec<Person>> {
        self.query_persons(
            &format!("{PERSON_SELECT_SQL} WHERE id >= ?1 ORDER BY id ASC LIMIT ?2;"),
            params![id, i64::from(count)],
        )
    }

    fn add_person(&self, person: &Person) -> RepoResult<PersonId> {
        // The rowid is read inside the transaction scope, before commit
        // finalizes, so a concurrent insert cannot be observed instead.
        self.execute_write(
            "INSERT INTO people (
                first_name,
                last_name,
                email,
                ip_address
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                person.first_name.as_str(),
                person.last_name.as_str(),
                person.email.as_str(),
                person.ip_address.as_str(),
            ],
        )
    }

    fn update_person(&self, person: &Person, id: PersonId) -> RepoResult<()> {
        // Zero affected rows is still success: the statement executed and
        // committed. Callers wanting not-found semantics must check first.
        self.execute_write(
            "UPDATE people
             SET
                first_name = ?1,
                last_name = ?2,
                email = ?3,
                ip_address = ?4
             WHERE id = ?5;",
            params![
                person.first_name.as_str(),
                person.last_name.as_str(),
                person.email.as_str(),
                person.ip_address.as_str(),
                id,
            ],
        )?;
        Ok(())
    }

    fn delete_person(&self, id: PersonId) -> RepoResult<()> {
        self.execute_write("DELETE FROM people WHERE id = ?1;", params![id])?;
        Ok(())
    }
}

fn parse_person_row(row: &Row<'_>) -> Result<Person, rusqlite::Error> {
    Ok(Person {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
        ip_address: row.get("ip_address")?,
    })
}
