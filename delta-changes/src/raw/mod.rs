//! Changes that carry hand-written SQL.
//!
//! Both changes embed [`SqlBase`] rather than implementing statement handling
//! themselves, so the catalog lists them one parent hop away from the
//! capability.

pub mod sql;
pub mod sql_file;

/// SQL text plus the options that control how it is split into statements.
#[derive(Debug, Clone)]
pub struct SqlBase {
    pub sql: String,
    pub split_statements: bool,
    pub strip_comments: bool,
    pub end_delimiter: String,
}

impl Default for SqlBase {
    fn default() -> Self {
        Self {
            sql: String::new(),
            split_statements: true,
            strip_comments: false,
            end_delimiter: ";".into(),
        }
    }
}

impl SqlBase {
    /// Statements to execute, in order. Blank statements are dropped.
    ///
    /// Delimiters and `--` inside single-quoted literals are left alone.
    pub fn statements(&self) -> Vec<String> {
        let delimiter = Some(self.end_delimiter.as_str())
            .filter(|d| self.split_statements && !d.is_empty());
        split_sql(&self.sql, delimiter, self.strip_comments)
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

fn split_sql(sql: &str, delimiter: Option<&str>, strip_comments: bool) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut in_literal = false;
    let mut rest = sql;

    while let Some(c) = rest.chars().next() {
        if !in_literal {
            if strip_comments && rest.starts_with("--") {
                rest = &rest[rest.find('\n').unwrap_or(rest.len())..];
                continue;
            }
            if let Some(delim) = delimiter.filter(|d| rest.starts_with(d)) {
                statements.push(std::mem::take(&mut current));
                rest = &rest[delim.len()..];
                continue;
            }
        }
        // A doubled quote inside a literal closes and reopens it.
        if c == '\'' {
            in_literal = !in_literal;
        }
        current.push(c);
        rest = &rest[c.len_utf8()..];
    }
    statements.push(current);
    statements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_default_delimiter() {
        let base = SqlBase {
            sql: "insert into a values (1);\n insert into a values (2);\n".into(),
            ..Default::default()
        };
        assert_eq!(
            base.statements(),
            vec!["insert into a values (1)", "insert into a values (2)"]
        );
    }

    #[test]
    fn test_no_split_keeps_single_statement() {
        let base = SqlBase {
            sql: "begin; select 1; end;".into(),
            split_statements: false,
            ..Default::default()
        };
        assert_eq!(base.statements(), vec!["begin; select 1; end;"]);
    }

    #[test]
    fn test_custom_delimiter_and_comments() {
        let base = SqlBase {
            sql: "-- seed\nselect 1 -- one\nGO\nselect 2\nGO".into(),
            strip_comments: true,
            end_delimiter: "GO".into(),
            ..Default::default()
        };
        assert_eq!(base.statements(), vec!["select 1", "select 2"]);
    }

    #[test]
    fn test_delimiter_inside_literal_is_kept() {
        let base = SqlBase {
            sql: "insert into t values ('a;b'); select 1".into(),
            ..Default::default()
        };
        assert_eq!(
            base.statements(),
            vec!["insert into t values ('a;b')", "select 1"]
        );
    }

    #[test]
    fn test_comment_marker_inside_literal_is_kept() {
        let base = SqlBase {
            sql: "select '--x' -- c\nselect 'it''s;--' from t;".into(),
            strip_comments: true,
            ..Default::default()
        };
        assert_eq!(
            base.statements(),
            vec!["select '--x' \nselect 'it''s;--' from t"]
        );
    }

    #[test]
    fn test_empty_sql_has_no_statements() {
        assert!(SqlBase::default().statements().is_empty());
    }
}
