use sqlx::{Sqlite, SqlitePool};

mod article_helpers;
mod comment_helpers;
mod topic_helpers;
mod user_helpers;

pub use article_helpers::*;
pub use comment_helpers::*;
pub use topic_helpers::*;
pub use user_helpers::*;

/// Appends `column = $n` clauses for whichever optional filters are present.
struct QueryBuilder {
    query: String,
    params: Vec<String>,
    seperator: Option<&'static str>,
}

impl QueryBuilder {
    fn new(initial: &str, seperator: Option<&'static str>) -> Self {
        Self {
            query: initial.to_owned(),
            params: vec![],
            seperator,
        }
    }

    fn add_param(mut self, filter: &str, param: Option<String>) -> Self {
        if let Some(value) = param {
            let filter = format!("{} = ${}", filter, self.params.len() + 1);
            self.query.push_str(&filter);
            if let Some(seperator) = self.seperator {
                self.query.push_str(seperator);
            }
            self.params.push(value);
        }
        self
    }

    fn trim(mut self) -> Self {
        if let Some(seperator) = self.seperator {
            self.query = self.query.trim_end_matches(seperator).to_string();
        }
        self
    }

    /// Empty query text when no filter was added.
    fn build(mut self) -> (String, Vec<String>) {
        self = self.trim();
        if self.params.is_empty() {
            self.query = String::new();
        }
        (self.query, self.params)
    }
}

// ----------------- Helper Functions -----------------

async fn row_exists(pool: &SqlitePool, query: &str, key: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<Sqlite, bool>(query)
        .bind(key)
        .fetch_one(pool)
        .await
}
