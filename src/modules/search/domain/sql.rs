//! Structured SQL fragments
//!
//! Search statements are assembled from fragments that interleave raw SQL
//! with bound values. A placeholder is only ever rendered for a bound value,
//! and values are collected in the same pass that renders placeholders, so a
//! rendered [`Statement`] always has exactly one parameter per placeholder,
//! in placeholder order.

use std::fmt::Write;

/// Bound parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Integer(i64),
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        SqlParam::Integer(value)
    }
}

/// How placeholders and pattern matching are spelled for a store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `?` placeholders and `LIKE`
    Generic,
    /// `$n` placeholders and `ILIKE` (PostgreSQL `LIKE` is case-sensitive).
    /// Backslash escaping is switched off so `\` in a pattern is a literal.
    Postgres,
}

impl Dialect {
    fn like_operator(&self) -> &'static str {
        match self {
            Dialect::Generic => "LIKE",
            Dialect::Postgres => "ILIKE",
        }
    }

    /// Suffix closing a `LIKE` comparison after its placeholder
    fn like_escape(&self) -> &'static str {
        match self {
            Dialect::Generic => "",
            Dialect::Postgres => " ESCAPE ''",
        }
    }

    fn write_placeholder(&self, out: &mut String, index: usize) {
        match self {
            Dialect::Generic => out.push('?'),
            Dialect::Postgres => {
                let _ = write!(out, "${}", index);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Part {
    Sql(String),
    Like,
    LikeEnd,
    Bind(SqlParam),
}

/// Ordered list of SQL text, `LIKE` operators and bound values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlFragment {
    parts: Vec<Part>,
}

impl SqlFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sql(mut self, text: &str) -> Self {
        self.push_sql(text);
        self
    }

    pub fn push_sql(&mut self, text: &str) {
        match self.parts.last_mut() {
            Some(Part::Sql(existing)) => existing.push_str(text),
            _ => self.parts.push(Part::Sql(text.to_string())),
        }
    }

    /// `<column> LIKE <placeholder>` with the pattern bound
    pub fn like(mut self, column: &str, pattern: &str) -> Self {
        self.push_sql(column);
        self.push_sql(" ");
        self.parts.push(Part::Like);
        self.push_sql(" ");
        self.parts.push(Part::Bind(SqlParam::Text(pattern.to_string())));
        self.parts.push(Part::LikeEnd);
        self
    }

    pub fn bind(mut self, value: impl Into<SqlParam>) -> Self {
        self.parts.push(Part::Bind(value.into()));
        self
    }

    /// Append another fragment, keeping its values in place
    pub fn append(&mut self, other: SqlFragment) {
        for part in other.parts {
            match part {
                Part::Sql(text) => self.push_sql(&text),
                other => self.parts.push(other),
            }
        }
    }

    /// Join fragments with a separator such as `" OR "`
    pub fn join(fragments: Vec<SqlFragment>, separator: &str) -> SqlFragment {
        let mut joined = SqlFragment::new();
        for (i, fragment) in fragments.into_iter().enumerate() {
            if i > 0 {
                joined.push_sql(separator);
            }
            joined.append(fragment);
        }
        joined
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Bound values in placeholder order
    pub fn params(&self) -> impl Iterator<Item = &SqlParam> {
        self.parts.iter().filter_map(|part| match part {
            Part::Bind(param) => Some(param),
            _ => None,
        })
    }

    pub fn render(&self, dialect: Dialect) -> Statement {
        let mut sql = String::new();
        let mut params = Vec::new();

        for part in &self.parts {
            match part {
                Part::Sql(text) => sql.push_str(text),
                Part::Like => sql.push_str(dialect.like_operator()),
                Part::LikeEnd => sql.push_str(dialect.like_escape()),
                Part::Bind(param) => {
                    params.push(param.clone());
                    dialect.write_placeholder(&mut sql, params.len());
                }
            }
        }

        Statement { sql, params }
    }
}

/// Rendered SQL with its positional parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_rendering() {
        let fragment = SqlFragment::new()
            .sql("SELECT * FROM anime WHERE ")
            .like("title", "%naruto%")
            .sql(" LIMIT ")
            .bind(20i64);

        let statement = fragment.render(Dialect::Generic);
        assert_eq!(
            statement.sql,
            "SELECT * FROM anime WHERE title LIKE ? LIMIT ?"
        );
        assert_eq!(
            statement.params,
            vec![SqlParam::Text("%naruto%".into()), SqlParam::Integer(20)]
        );
    }

    #[test]
    fn test_postgres_numbers_placeholders() {
        let fragment = SqlFragment::new()
            .like("title", "%a%")
            .sql(" OR ")
            .like("description", "%a%");

        let statement = fragment.render(Dialect::Postgres);
        assert_eq!(
            statement.sql,
            "title ILIKE $1 ESCAPE '' OR description ILIKE $2 ESCAPE ''"
        );
        assert_eq!(statement.params.len(), 2);
    }

    #[test]
    fn test_backslash_stays_literal() {
        let statement = SqlFragment::new()
            .like("title", "%ab\\%")
            .sql(" LIMIT ")
            .bind(20i64)
            .render(Dialect::Postgres);

        assert_eq!(statement.sql, "title ILIKE $1 ESCAPE '' LIMIT $2");
        assert_eq!(
            statement.params,
            vec![SqlParam::Text("%ab\\%".into()), SqlParam::Integer(20)]
        );

        let generic = SqlFragment::new().like("title", "%ab\\%").render(Dialect::Generic);
        assert_eq!(generic.sql, "title LIKE ?");
    }

    #[test]
    fn test_join_and_append_keep_order() {
        let parts = vec![
            SqlFragment::new().bind("a"),
            SqlFragment::new().bind("b"),
            SqlFragment::new().bind("c"),
        ];
        let joined = SqlFragment::join(parts, ", ");
        let statement = joined.render(Dialect::Generic);
        assert_eq!(statement.sql, "?, ?, ?");
        assert_eq!(
            statement.params,
            vec![
                SqlParam::Text("a".into()),
                SqlParam::Text("b".into()),
                SqlParam::Text("c".into())
            ]
        );
    }

    #[test]
    fn test_values_are_never_inlined() {
        let statement = SqlFragment::new()
            .like("title", "%'; DROP TABLE anime; --%")
            .render(Dialect::Generic);
        assert_eq!(statement.sql, "title LIKE ?");
    }
}
