use std::fmt;

use super::predicate::EntityKind;
use super::sql::SqlFragment;

/// Result ordering requested by the `sort` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Relevance,
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
}

impl SortOrder {
    /// Unknown keys sort by relevance
    pub fn parse(raw: &str) -> Self {
        match raw {
            "newest" => SortOrder::Newest,
            "oldest" => SortOrder::Oldest,
            "title_asc" => SortOrder::TitleAsc,
            "title_desc" => SortOrder::TitleDesc,
            _ => SortOrder::Relevance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::TitleAsc => "title_asc",
            SortOrder::TitleDesc => "title_desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Build the ORDER BY clause for one entity.
///
/// Relevance ranks rows by which column matches the primary pattern and
/// binds that pattern once per column; these values must come after the
/// predicate's values and before LIMIT/OFFSET. Without a primary pattern
/// relevance falls back to title order.
pub fn resolve(sort: SortOrder, entity: EntityKind, primary: Option<&str>) -> SqlFragment {
    let effective = match (sort, primary) {
        (SortOrder::Relevance, None) => SortOrder::TitleAsc,
        (sort, _) => sort,
    };

    match (effective, entity) {
        (SortOrder::Newest, EntityKind::Anime) => SqlFragment::new().sql("ORDER BY created_at DESC"),
        (SortOrder::Oldest, EntityKind::Anime) => SqlFragment::new().sql("ORDER BY created_at ASC"),
        (SortOrder::TitleAsc, EntityKind::Anime) => SqlFragment::new().sql("ORDER BY title ASC"),
        (SortOrder::TitleDesc, EntityKind::Anime) => SqlFragment::new().sql("ORDER BY title DESC"),
        (SortOrder::Newest, EntityKind::Episodes) => {
            SqlFragment::new().sql("ORDER BY e.created_at DESC, e.episode_number ASC")
        }
        (SortOrder::Oldest, EntityKind::Episodes) => {
            SqlFragment::new().sql("ORDER BY e.created_at ASC, e.episode_number ASC")
        }
        (SortOrder::TitleAsc, EntityKind::Episodes) => {
            SqlFragment::new().sql("ORDER BY a.title ASC, e.episode_number ASC")
        }
        (SortOrder::TitleDesc, EntityKind::Episodes) => {
            SqlFragment::new().sql("ORDER BY a.title DESC, e.episode_number ASC")
        }
        (SortOrder::Relevance, _) => relevance(entity, primary.unwrap_or_default()),
    }
}

fn relevance(entity: EntityKind, primary: &str) -> SqlFragment {
    let [first, second] = entity.text_columns();
    let tie_break = match entity {
        EntityKind::Anime => ", title ASC",
        EntityKind::Episodes => ", e.episode_number ASC",
    };

    SqlFragment::new()
        .sql("ORDER BY CASE WHEN ")
        .like(first, primary)
        .sql(" THEN 1 WHEN ")
        .like(second, primary)
        .sql(" THEN 2 ELSE 3 END")
        .sql(tie_break)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::search::domain::sql::{Dialect, SqlParam};

    #[test]
    fn test_parse_defaults_to_relevance() {
        assert_eq!(SortOrder::parse("newest"), SortOrder::Newest);
        assert_eq!(SortOrder::parse("title_desc"), SortOrder::TitleDesc);
        assert_eq!(SortOrder::parse("popularity"), SortOrder::Relevance);
        assert_eq!(SortOrder::parse(""), SortOrder::Relevance);
    }

    #[test]
    fn test_relevance_binds_primary_twice() {
        let order = resolve(SortOrder::Relevance, EntityKind::Anime, Some("%naruto%"));
        let statement = order.render(Dialect::Generic);
        assert_eq!(
            statement.sql,
            "ORDER BY CASE WHEN title LIKE ? THEN 1 WHEN description LIKE ? THEN 2 ELSE 3 END, title ASC"
        );
        assert_eq!(
            statement.params,
            vec![
                SqlParam::Text("%naruto%".into()),
                SqlParam::Text("%naruto%".into())
            ]
        );
    }

    #[test]
    fn test_relevance_without_text_is_title_order() {
        let anime = resolve(SortOrder::Relevance, EntityKind::Anime, None).render(Dialect::Generic);
        assert_eq!(anime.sql, "ORDER BY title ASC");
        assert!(anime.params.is_empty());

        let episodes =
            resolve(SortOrder::Relevance, EntityKind::Episodes, None).render(Dialect::Generic);
        assert_eq!(episodes.sql, "ORDER BY a.title ASC, e.episode_number ASC");
    }

    #[test]
    fn test_newest_episodes_ignore_relevance() {
        let order = resolve(SortOrder::Newest, EntityKind::Episodes, Some("%ep%"));
        let statement = order.render(Dialect::Generic);
        assert_eq!(
            statement.sql,
            "ORDER BY e.created_at DESC, e.episode_number ASC"
        );
        assert!(statement.params.is_empty());
    }

    #[test]
    fn test_title_orders_never_bind() {
        for sort in [
            SortOrder::Newest,
            SortOrder::Oldest,
            SortOrder::TitleAsc,
            SortOrder::TitleDesc,
        ] {
            for entity in [EntityKind::Anime, EntityKind::Episodes] {
                let order = resolve(sort, entity, Some("%x%"));
                assert_eq!(order.params().count(), 0);
            }
        }
    }
}
