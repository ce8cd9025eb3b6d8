use std::borrow::Cow;

use super::predicate::EntityKind;
use super::sort_resolver::SortOrder;
use crate::shared::application::pagination::{PaginationParams, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::shared::errors::{AppError, AppResult};

/// Which entities a search covers (the `type` parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    All,
    Anime,
    Episodes,
}

impl SearchType {
    /// Unknown values search nothing
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "all" => Some(SearchType::All),
            "anime" => Some(SearchType::Anime),
            "episodes" => Some(SearchType::Episodes),
            _ => None,
        }
    }

    pub fn includes(&self, entity: EntityKind) -> bool {
        matches!(
            (self, entity),
            (SearchType::All, _)
                | (SearchType::Anime, EntityKind::Anime)
                | (SearchType::Episodes, EntityKind::Episodes)
        )
    }
}

/// Raw `/api/search` parameters, decoded but not yet validated.
///
/// Repeated keys keep their first value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub q: Option<String>,
    pub search_type: Option<String>,
    pub genre: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub fuzzy: Option<String>,
}

impl SearchParams {
    /// Parse a query string, with or without its leading `?`
    pub fn from_query_string(raw: &str) -> Self {
        let mut params = SearchParams::default();
        let raw = raw.strip_prefix('?').unwrap_or(raw);

        for pair in raw.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key);
            let slot = match &*key {
                "q" => &mut params.q,
                "type" => &mut params.search_type,
                "genre" => &mut params.genre,
                "sort" => &mut params.sort,
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                "fuzzy" => &mut params.fuzzy,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(decode_component(value).into_owned());
            }
        }

        params
    }
}

fn decode_component(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['+', '%']) {
        return Cow::Borrowed(raw);
    }
    let spaced = raw.replace('+', " ");
    let decoded = match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes()))
            .into_owned(),
    };
    Cow::Owned(decoded)
}

/// Leading integer of a parameter (`"2abc"` is 2); `None` when there is none
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let digits_start = usize::from(trimmed.starts_with(['-', '+']));
    let digits_len = trimmed[digits_start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..digits_start + digits_len].parse::<i64>().ok()
}

/// A validated search request
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// `q` exactly as received, echoed back in the response
    pub query: Option<String>,
    /// `genre` exactly as received
    pub genre: Option<String>,
    /// `type` as received, `"all"` when missing
    pub type_label: String,
    pub search_type: Option<SearchType>,
    /// `sort` as received, `"relevance"` when missing
    pub sort_label: String,
    pub sort: SortOrder,
    pub pagination: PaginationParams,
    pub fuzzy: bool,
}

impl SearchQuery {
    /// Validate parameters: page, then limit, then the presence of `q` or `genre`
    pub fn from_params(params: SearchParams) -> AppResult<Self> {
        let type_label = non_empty(params.search_type).unwrap_or_else(|| "all".to_string());
        let sort_label = non_empty(params.sort).unwrap_or_else(|| "relevance".to_string());

        let page = match non_empty(params.page) {
            Some(raw) => parse_leading_int(&raw).ok_or_else(|| {
                AppError::InvalidInput("Page must be a positive integer".to_string())
            })?,
            None => DEFAULT_PAGE,
        };
        let limit = match non_empty(params.limit) {
            Some(raw) => parse_leading_int(&raw).ok_or_else(|| {
                AppError::InvalidInput("Limit must be between 1 and 100".to_string())
            })?,
            None => DEFAULT_PAGE_SIZE,
        };
        let pagination = PaginationParams::new(page, limit)?;

        let has_text = params.q.as_deref().is_some_and(|q| !q.is_empty());
        let has_genre = params.genre.as_deref().is_some_and(|g| !g.is_empty());
        if !has_text && !has_genre {
            return Err(AppError::InvalidInput(
                "At least one search parameter (q or genre) is required".to_string(),
            ));
        }

        Ok(Self {
            query: params.q,
            genre: params.genre,
            search_type: SearchType::parse(&type_label),
            type_label,
            sort: SortOrder::parse(&sort_label),
            sort_label,
            pagination,
            fuzzy: params.fuzzy.as_deref() != Some("false"),
        })
    }

    pub fn from_query_string(raw: &str) -> AppResult<Self> {
        Self::from_params(SearchParams::from_query_string(raw))
    }

    /// Search text, when non-empty
    pub fn text(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    /// Genre filter, when non-empty
    pub fn genre_filter(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }

    pub fn includes(&self, entity: EntityKind) -> bool {
        self.search_type.is_some_and(|t| t.includes(entity))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
