use super::pattern_expander::{wrap, PatternSet};
use super::sql::SqlFragment;

/// Searchable entity: anime on their own, or episodes joined to their anime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Anime,
    Episodes,
}

impl EntityKind {
    /// FROM clause
    pub fn source(&self) -> &'static str {
        match self {
            EntityKind::Anime => "anime",
            EntityKind::Episodes => "episodes e JOIN anime a ON e.anime_id = a.id",
        }
    }

    /// Columns returned for a page of results
    pub fn select_columns(&self) -> &'static str {
        match self {
            EntityKind::Anime => {
                "id, title, thumbnail_url, genre, description, created_at, updated_at"
            }
            EntityKind::Episodes => {
                "e.id, e.anime_id, e.title, e.episode_number, e.thumbnail_url, \
                 e.video_url_480p, e.video_url_720p, e.video_url_1080p, \
                 e.video_url_max_quality, e.created_at, e.updated_at, \
                 a.title AS anime_title, a.genre AS anime_genre"
            }
        }
    }

    /// Text columns matched by every pattern, strongest match first
    pub fn text_columns(&self) -> [&'static str; 2] {
        match self {
            EntityKind::Anime => ["title", "description"],
            EntityKind::Episodes => ["e.title", "a.title"],
        }
    }

    pub fn genre_column(&self) -> &'static str {
        match self {
            EntityKind::Anime => "genre",
            EntityKind::Episodes => "a.genre",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Anime => "anime",
            EntityKind::Episodes => "episodes",
        }
    }
}

/// Filter clauses ANDed together; each clause carries its own bound values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    clauses: Vec<SqlFragment>,
}

impl Predicate {
    /// Match any pattern against either text column, and the genre when given.
    ///
    /// Values are bound in emission order: the primary pattern once per
    /// column, then each variant once per column, then the genre.
    pub fn build(entity: EntityKind, patterns: &PatternSet, genre: Option<&str>) -> Self {
        let mut clauses = Vec::new();

        if !patterns.is_empty() {
            let [first, second] = entity.text_columns();
            let per_pattern: Vec<SqlFragment> = patterns
                .iter()
                .map(|pattern| {
                    SqlFragment::new()
                        .sql("(")
                        .like(first, pattern)
                        .sql(" OR ")
                        .like(second, pattern)
                        .sql(")")
                })
                .collect();

            let mut any_pattern = SqlFragment::new().sql("(");
            any_pattern.append(SqlFragment::join(per_pattern, " OR "));
            any_pattern.push_sql(")");
            clauses.push(any_pattern);
        }

        if let Some(genre) = genre.filter(|g| !g.is_empty()) {
            clauses.push(SqlFragment::new().like(entity.genre_column(), &wrap(genre)));
        }

        Self { clauses }
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// `WHERE a AND b`, or nothing when unrestricted
    pub fn where_clause(&self) -> SqlFragment {
        if self.clauses.is_empty() {
            return SqlFragment::new();
        }
        let mut fragment = SqlFragment::new().sql("WHERE ");
        fragment.append(SqlFragment::join(self.clauses.clone(), " AND "));
        fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::search::domain::sql::{Dialect, SqlParam};

    fn text(values: &[&str]) -> Vec<SqlParam> {
        values.iter().map(|v| SqlParam::Text(v.to_string())).collect()
    }

    #[test]
    fn test_empty_predicate_has_no_where() {
        let predicate = Predicate::build(EntityKind::Anime, &PatternSet::default(), None);
        assert!(predicate.is_empty());
        assert!(predicate.where_clause().is_empty());
    }

    #[test]
    fn test_anime_text_and_genre() {
        let patterns = PatternSet::expand(Some("naruto"), false);
        let predicate = Predicate::build(EntityKind::Anime, &patterns, Some("Action"));
        let statement = predicate.where_clause().render(Dialect::Generic);

        assert_eq!(
            statement.sql,
            "WHERE ((title LIKE ? OR description LIKE ?)) AND genre LIKE ?"
        );
        assert_eq!(
            statement.params,
            text(&["%naruto%", "%naruto%", "%Action%"])
        );
    }

    #[test]
    fn test_episode_columns_use_join_aliases() {
        let patterns = PatternSet::expand(Some("ep"), true);
        let predicate = Predicate::build(EntityKind::Episodes, &patterns, Some("Drama"));
        let statement = predicate.where_clause().render(Dialect::Generic);

        assert_eq!(
            statement.sql,
            "WHERE ((e.title LIKE ? OR a.title LIKE ?)) AND a.genre LIKE ?"
        );
    }

    #[test]
    fn test_variant_params_follow_primary_then_genre_last() {
        let patterns = PatternSet::expand(Some("abc"), true);
        let predicate = Predicate::build(EntityKind::Anime, &patterns, Some("Comedy"));
        let statement = predicate.where_clause().render(Dialect::Generic);

        let mut expected = Vec::new();
        for pattern in ["%abc%", "%bc%", "%ac%", "%ab%", "%bac%", "%acb%"] {
            expected.push(pattern);
            expected.push(pattern);
        }
        expected.push("%Comedy%");
        assert_eq!(statement.params, text(&expected));
        assert_eq!(statement.sql.matches('?').count(), statement.params.len());
        assert_eq!(statement.sql.matches(" OR ").count(), 6 + 5);
    }

    #[test]
    fn test_genre_only() {
        let predicate = Predicate::build(EntityKind::Episodes, &PatternSet::default(), Some("Isekai"));
        assert_eq!(predicate.clause_count(), 1);
        let statement = predicate.where_clause().render(Dialect::Postgres);
        assert_eq!(statement.sql, "WHERE a.genre ILIKE $1 ESCAPE ''");
        assert_eq!(statement.params, text(&["%Isekai%"]));
    }

    #[test]
    fn test_empty_genre_is_ignored() {
        let patterns = PatternSet::expand(Some("bleach"), false);
        let predicate = Predicate::build(EntityKind::Anime, &patterns, Some(""));
        assert_eq!(predicate.clause_count(), 1);
    }
}
