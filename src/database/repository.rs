use sqlx::{postgres::PgRow, FromRow, PgPool, Row};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::query::{ListQuery, Paged};

/// Generic reads over a single content table: substring search, paging,
/// newest-first order. Writes are hand-written per model.
pub struct Repository<T> {
    table_name: String,
    pool: PgPool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Repository<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    pub fn new(table_name: impl Into<String>, pool: PgPool) -> Result<Self, DatabaseError> {
        let name = table_name.into();
        if !is_valid_identifier(&name) {
            return Err(DatabaseError::QueryError(format!(
                "invalid table name: {}",
                name
            )));
        }
        Ok(Self {
            table_name: name,
            pool,
            _phantom: std::marker::PhantomData,
        })
    }

    /// One page of rows matched case-insensitively against `searchable`
    /// columns, plus the total count for the same term.
    pub async fn list(
        &self,
        query: &ListQuery,
        searchable: &[&str],
    ) -> Result<Paged<T>, DatabaseError> {
        let where_clause = match query.term() {
            Some(_) => Some(search_clause(searchable)?),
            None => None,
        };
        let pattern = query.term().map(like_pattern);

        let mut sql = format!("SELECT * FROM \"{}\"", self.table_name);
        let mut count_sql = format!("SELECT COUNT(*) AS count FROM \"{}\"", self.table_name);
        if let Some(clause) = &where_clause {
            sql.push_str(&format!(" WHERE {}", clause));
            count_sql.push_str(&format!(" WHERE {}", clause));
        }
        if pattern.is_some() {
            sql.push_str(" ORDER BY created_at DESC LIMIT $2 OFFSET $3");
        } else {
            sql.push_str(" ORDER BY created_at DESC LIMIT $1 OFFSET $2");
        }

        let mut rows_query = sqlx::query_as::<_, T>(&sql);
        let mut count_query = sqlx::query(&count_sql);
        if let Some(pattern) = &pattern {
            rows_query = rows_query.bind(pattern);
            count_query = count_query.bind(pattern);
        }

        let items = rows_query
            .bind(query.per_page())
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = count_query.fetch_one(&self.pool).await?.try_get("count")?;

        Ok(Paged {
            items,
            page: query.page(),
            per_page: query.per_page(),
            total,
        })
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, DatabaseError> {
        let sql = format!("SELECT * FROM \"{}\" WHERE id = $1", self.table_name);
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Returns false when no row had the given id.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let sql = format!("DELETE FROM \"{}\" WHERE id = $1", self.table_name);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

fn search_clause(searchable: &[&str]) -> Result<String, DatabaseError> {
    if searchable.is_empty() {
        return Err(DatabaseError::QueryError(
            "no searchable columns for table".to_string(),
        ));
    }
    let parts: Vec<String> = searchable
        .iter()
        .map(|column| {
            if !is_valid_identifier(column) {
                return Err(DatabaseError::QueryError(format!(
                    "invalid column name: {}",
                    column
                )));
            }
            Ok(format!("\"{}\" ILIKE $1", column))
        })
        .collect::<Result<_, _>>()?;
    Ok(format!("({})", parts.join(" OR ")))
}

/// Wrap the term in wildcards, escaping ILIKE metacharacters so a literal
/// `%` or `_` in user input stays literal.
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty()
        && name.chars().next().map_or(false, |c| c.is_ascii_lowercase())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("valve"), "%valve%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn identifier_validation() {
        assert!(is_valid_identifier("products"));
        assert!(is_valid_identifier("employment_type"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("Products"));
        assert!(!is_valid_identifier("products; DROP TABLE"));
        assert!(!is_valid_identifier("1st"));
    }

    #[test]
    fn search_clause_joins_columns() {
        let clause = search_clause(&["name", "category"]).unwrap();
        assert_eq!(clause, "(\"name\" ILIKE $1 OR \"category\" ILIKE $1)");
        assert!(search_clause(&[]).is_err());
        assert!(search_clause(&["bad column"]).is_err());
    }
}
