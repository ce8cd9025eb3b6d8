use super::pattern_expander::PatternSet;
use super::predicate::{EntityKind, Predicate};
use super::sort_resolver::{self, SortOrder};
use super::sql::{Dialect, SqlFragment, Statement};
use crate::shared::application::pagination::PaginationParams;

/// Count and page statements for one entity kind
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPlan {
    entity: EntityKind,
    predicate: Predicate,
    order: SqlFragment,
    pagination: PaginationParams,
}

impl SearchPlan {
    pub fn new(
        entity: EntityKind,
        patterns: &PatternSet,
        genre: Option<&str>,
        sort: SortOrder,
        pagination: PaginationParams,
    ) -> Self {
        Self {
            entity,
            predicate: Predicate::build(entity, patterns, genre),
            order: sort_resolver::resolve(sort, entity, patterns.primary()),
            pagination,
        }
    }

    pub fn entity(&self) -> EntityKind {
        self.entity
    }

    /// `SELECT COUNT(*)` over the filtered rows
    pub fn count_statement(&self, dialect: Dialect) -> Statement {
        let mut fragment = SqlFragment::new()
            .sql("SELECT COUNT(*) AS count FROM ")
            .sql(self.entity.source());
        self.append_where(&mut fragment);
        fragment.render(dialect)
    }

    /// Filtered, ordered page: predicate values, then order values, then limit and offset
    pub fn page_statement(&self, dialect: Dialect) -> Statement {
        let mut fragment = SqlFragment::new()
            .sql("SELECT ")
            .sql(self.entity.select_columns())
            .sql(" FROM ")
            .sql(self.entity.source());
        self.append_where(&mut fragment);
        fragment.push_sql(" ");
        fragment.append(self.order.clone());
        fragment.append(
            SqlFragment::new()
                .sql(" LIMIT ")
                .bind(self.pagination.limit())
                .sql(" OFFSET ")
                .bind(self.pagination.offset()),
        );
        fragment.render(dialect)
    }

    fn append_where(&self, fragment: &mut SqlFragment) {
        if !self.predicate.is_empty() {
            fragment.push_sql(" ");
            fragment.append(self.predicate.where_clause());
        }
    }
}
