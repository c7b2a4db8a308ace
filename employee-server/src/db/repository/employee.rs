//! Employee Repository

use std::collections::BTreeMap;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{
    EmployeeContent, EmployeeMerge, EmployeeRecord, FilterValue, parse_filter_value, store_column,
};
use shared::models::{Employee, EmployeePatch};
use shared::types::SearchMode;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

const TABLE: &str = "employees";

/// Guard marker thrown inside the insert transaction on a taken emp_no
const DUPLICATE_MARKER: &str = "duplicate emp_no";

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Check whether any document carries the given business id
    ///
    /// Stops at the first match instead of scanning the whole collection.
    pub async fn exists(&self, emp_no: i64) -> RepoResult<bool> {
        let mut result = self
            .base
            .db()
            .query("SELECT VALUE id FROM employees WHERE emp_no = $emp_no LIMIT 1")
            .bind(("emp_no", emp_no))
            .await?;
        let ids: Vec<RecordId> = result.take(0)?;
        Ok(!ids.is_empty())
    }

    /// Insert a new employee document
    ///
    /// The password is hashed before the write. Uniqueness of `emp_no` is
    /// checked up front and enforced again inside the insert transaction,
    /// so two concurrent inserts of the same id cannot both commit.
    pub async fn create(&self, employee: Employee) -> RepoResult<()> {
        let emp_no = employee.id;
        if self.exists(emp_no).await? {
            return Err(RepoError::Duplicate(format!(
                "employee with id {emp_no} already exists"
            )));
        }

        let mut content = EmployeeContent::from_wire(employee);
        content.password = EmployeeRecord::hash_password(&content.password)
            .map_err(|e| RepoError::Database(format!("failed to hash password: {e}")))?;
        self.insert_guarded(emp_no, content).await
    }

    /// Run the insert transaction, rechecking `emp_no` inside it
    ///
    /// The recheck catches a writer that lands between the caller's
    /// lookup and the insert.
    async fn insert_guarded(&self, emp_no: i64, content: EmployeeContent) -> RepoResult<()> {
        let mut response = self
            .base
            .db()
            .query(format!(
                r#"BEGIN TRANSACTION;
                IF array::len((SELECT VALUE id FROM employees WHERE emp_no = $emp_no LIMIT 1)) > 0 {{
                    THROW "{DUPLICATE_MARKER}";
                }};
                CREATE employees CONTENT $content;
                COMMIT TRANSACTION;"#
            ))
            .bind(("emp_no", emp_no))
            .bind(("content", content))
            .await?;

        // A THROW aborts the transaction; every statement in it then
        // reports an error, so scan all of them for the guard marker.
        let errors = response.take_errors();
        if !errors.is_empty() {
            if errors
                .values()
                .any(|e| e.to_string().contains(DUPLICATE_MARKER))
            {
                return Err(RepoError::Duplicate(format!(
                    "employee with id {emp_no} already exists"
                )));
            }
            let msg = errors
                .into_values()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(RepoError::Database(msg));
        }

        Ok(())
    }

    /// Fetch every employee document
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let records: Vec<EmployeeRecord> = self.base.db().select(TABLE).await?;
        Ok(records.into_iter().map(EmployeeRecord::into_wire).collect())
    }

    /// Find the first document with the given business id
    pub async fn find_by_emp_no(&self, emp_no: i64) -> RepoResult<Employee> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employees WHERE emp_no = $emp_no LIMIT 1")
            .bind(("emp_no", emp_no))
            .await?;
        let records: Vec<EmployeeRecord> = result.take(0)?;
        records
            .into_iter()
            .next()
            .map(EmployeeRecord::into_wire)
            .ok_or_else(|| RepoError::NotFound(format!("no employee with id {emp_no}")))
    }

    /// Merge a partial update into the first document matching the id
    ///
    /// A missing id is a no-op, not an error. A patched password is
    /// re-hashed so the stored value never holds plaintext.
    pub async fn update(&self, emp_no: i64, patch: EmployeePatch) -> RepoResult<()> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employees WHERE emp_no = $emp_no LIMIT 1")
            .bind(("emp_no", emp_no))
            .await?;
        let matches: Vec<EmployeeRecord> = result.take(0)?;
        let Some(existing) = matches.into_iter().next() else {
            tracing::warn!(emp_no, "no employee matched the update, nothing merged");
            return Ok(());
        };

        let mut merge = EmployeeMerge::from_patch(patch);
        if let Some(plain) = merge.password.take() {
            merge.password = Some(
                EmployeeRecord::hash_password(&plain)
                    .map_err(|e| RepoError::Database(format!("failed to hash password: {e}")))?,
            );
        }

        self.base
            .db()
            .query("UPDATE $record MERGE $data")
            .bind(("record", existing.id))
            .bind(("data", merge))
            .await?
            .check()?;
        Ok(())
    }

    /// Delete every document with the given business id
    ///
    /// Matches are enumerated first; an id with no documents is an error.
    /// Returns how many documents were removed.
    pub async fn delete(&self, emp_no: i64) -> RepoResult<usize> {
        let mut result = self
            .base
            .db()
            .query("SELECT VALUE id FROM employees WHERE emp_no = $emp_no")
            .bind(("emp_no", emp_no))
            .await?;
        let ids: Vec<RecordId> = result.take(0)?;
        if ids.is_empty() {
            return Err(RepoError::NotFound(format!("no employee with id {emp_no}")));
        }

        self.base
            .db()
            .query("DELETE employees WHERE emp_no = $emp_no")
            .bind(("emp_no", emp_no))
            .await?
            .check()?;
        Ok(ids.len())
    }

    /// Multi-field equality search
    ///
    /// Union mode runs one lookup per filter and concatenates the result
    /// lists, so a document matching several filters appears several
    /// times. Intersect mode builds a single conjunctive query and
    /// returns each match once.
    pub async fn search(
        &self,
        filters: &[(String, String)],
        mode: SearchMode,
    ) -> RepoResult<Vec<Employee>> {
        match mode {
            SearchMode::Union => self.search_union(filters).await,
            SearchMode::Intersect => self.search_intersect(filters).await,
        }
    }

    async fn search_union(&self, filters: &[(String, String)]) -> RepoResult<Vec<Employee>> {
        let mut employees = Vec::new();
        for (field, raw) in filters {
            // An unknown field or a mistyped operand matches nothing; it
            // contributes an empty slice instead of failing the search.
            let Some(column) = store_column(field) else {
                tracing::warn!(field = %field, "search field is not filterable");
                continue;
            };
            let Some(value) = parse_filter_value(column, raw) else {
                tracing::warn!(field = %field, value = %raw, "search value does not match the field type");
                continue;
            };

            let mut result = self
                .base
                .db()
                .query(format!("SELECT * FROM employees WHERE {column} = $value"))
                .bind(("value", value))
                .await?;
            let records: Vec<EmployeeRecord> = result.take(0)?;
            employees.extend(records.into_iter().map(EmployeeRecord::into_wire));
        }
        Ok(employees)
    }

    async fn search_intersect(&self, filters: &[(String, String)]) -> RepoResult<Vec<Employee>> {
        let mut clauses = Vec::new();
        let mut bindings: BTreeMap<String, FilterValue> = BTreeMap::new();
        for (field, raw) in filters {
            // A conjunct that can never hold empties the whole result.
            let Some(column) = store_column(field) else {
                return Ok(Vec::new());
            };
            let Some(value) = parse_filter_value(column, raw) else {
                return Ok(Vec::new());
            };
            let param = format!("v{}", bindings.len());
            clauses.push(format!("{column} = ${param}"));
            bindings.insert(param, value);
        }
        if clauses.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!("SELECT * FROM employees WHERE {}", clauses.join(" AND "));
        let mut result = self.base.db().query(sql).bind(bindings).await?;
        let records: Vec<EmployeeRecord> = result.take(0)?;
        Ok(records.into_iter().map(EmployeeRecord::into_wire).collect())
    }
}
