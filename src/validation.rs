//! Argument checks run by the repositories before touching the store.

use serde_json::{Number, Value};

use crate::errors::RequestError;

const MISSING_INC_VOTES: &str = "Missing inc_votes data in request body";
pub(crate) const INVALID_INC_VOTES: &str = "Invalid inc_votes data in request body";

/// Parses a path token as a strictly positive integer id.
///
/// Signs, whitespace, zero and values that overflow `i64` are all rejected.
pub fn parse_id(token: &str, invalid: &'static str) -> Result<i64, RequestError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RequestError::InvalidInput(invalid));
    }
    match token.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(RequestError::InvalidInput(invalid)),
    }
}

/// Columns an article listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    Author,
    Title,
    ArticleId,
    Topic,
    #[default]
    CreatedAt,
    Votes,
}

impl SortBy {
    pub fn parse(value: Option<&str>) -> Result<SortBy, RequestError> {
        match value {
            None => Ok(SortBy::default()),
            Some("author") => Ok(SortBy::Author),
            Some("title") => Ok(SortBy::Title),
            Some("article_id") => Ok(SortBy::ArticleId),
            Some("topic") => Ok(SortBy::Topic),
            Some("created_at") => Ok(SortBy::CreatedAt),
            Some("votes") => Ok(SortBy::Votes),
            Some(_) => Err(RequestError::InvalidInput("Invalid sort_by query")),
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            SortBy::Author => "articles.author",
            SortBy::Title => "articles.title",
            SortBy::ArticleId => "articles.article_id",
            SortBy::Topic => "articles.topic",
            SortBy::CreatedAt => "articles.created_at",
            SortBy::Votes => "articles.votes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    Asc,
    #[default]
    Desc,
}

impl Order {
    pub fn parse(value: Option<&str>) -> Result<Order, RequestError> {
        match value {
            None => Ok(Order::default()),
            Some("asc") => Ok(Order::Asc),
            Some("desc") => Ok(Order::Desc),
            Some(_) => Err(RequestError::InvalidInput("Invalid order query")),
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// Extracts the vote delta from a request body value.
///
/// Falsy values (absent, `null`, `false`, `0`, `""`) count as missing, so an
/// explicit zero is rejected rather than treated as a no-op. Whole numbers
/// written as floats (`1.0`, `1e2`) are accepted. Deltas must fit in `i32` so a
/// single request can never push a stored count past `i64`.
pub fn parse_inc_votes(value: Option<&Value>) -> Result<i64, RequestError> {
    let delta = match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => {
            return Err(RequestError::InvalidInput(MISSING_INC_VOTES))
        }
        Some(Value::String(s)) if s.is_empty() => {
            return Err(RequestError::InvalidInput(MISSING_INC_VOTES))
        }
        Some(Value::Number(number)) => {
            whole_number(number).ok_or(RequestError::InvalidInput(INVALID_INC_VOTES))?
        }
        Some(_) => return Err(RequestError::InvalidInput(INVALID_INC_VOTES)),
    };
    if delta == 0 {
        return Err(RequestError::InvalidInput(MISSING_INC_VOTES));
    }
    i32::try_from(delta)
        .map(i64::from)
        .map_err(|_| RequestError::InvalidInput(INVALID_INC_VOTES))
}

fn whole_number(number: &Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }
    let value = number.as_f64()?;
    let in_range = value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX);
    if value.fract() == 0.0 && in_range {
        Some(value as i64)
    } else {
        None
    }
}

/// A required body field: absent and empty are both missing.
pub fn required(field: Option<String>) -> Result<String, RequestError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(RequestError::InvalidInput("Missing required fields")),
    }
}
