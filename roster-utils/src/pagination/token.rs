//! Stateless pagination token encoding, parsing, and validation.
//!
//! Every interactive control carries a compact custom ID so a click can be
//! routed back to its table without any session storage.

const TOKEN_PREFIX: &str = "pg";
const JUMP_TOKEN_PREFIX: &str = "pgm";

/// Action carried by a navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Prev,
    Next,
    Page,
    Jump,
}

impl NavAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prev => "prev",
            Self::Next => "next",
            Self::Page => "page",
            Self::Jump => "jump",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "prev" => Some(Self::Prev),
            "next" => Some(Self::Next),
            "page" => Some(Self::Page),
            "jump" => Some(Self::Jump),
            _ => None,
        }
    }
}

/// Parsed pagination token data from a control's custom ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationToken {
    /// Logical table name (e.g. `users`).
    pub table: String,
    pub action: NavAction,
    /// Target page number, 1-based.
    pub page: usize,
    /// Total page count when the control was rendered.
    pub total_pages: usize,
}

/// Parsed jump-prompt submission: the prompt token plus the entered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpSubmission {
    pub table: String,
    /// Total page count at prompt-open time.
    pub total_pages_hint: usize,
    /// Raw page entered by the user; clamped later.
    pub entered_page: i64,
}

/// Validation outcome for pagination control activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationValidationError {
    Invalid,
    WrongTable,
}

/// Build a compact custom ID carrying stateless pagination state.
pub fn build_custom_id(
    table: &str,
    action: NavAction,
    target_page: usize,
    total_pages: usize,
) -> String {
    format!(
        "{TOKEN_PREFIX}:{table}:{}:{target_page}:{total_pages}",
        action.as_str()
    )
}

/// Parse a pagination custom ID.
pub fn parse_custom_id(custom_id: &str) -> Option<PaginationToken> {
    let mut parts = custom_id.trim().split(':');

    let prefix = parts.next()?;
    if prefix != TOKEN_PREFIX {
        return None;
    }

    let table = parts.next().filter(|table| !table.is_empty())?.to_owned();
    let action = NavAction::parse(parts.next()?)?;
    let page = parts.next()?.parse::<usize>().ok()?;
    let total_pages = parts.next()?.parse::<usize>().ok()?;

    if parts.next().is_some() {
        return None;
    }

    Some(PaginationToken {
        table,
        action,
        page,
        total_pages,
    })
}

/// Validate a pagination token against the table expected to handle it.
pub fn validate_custom_id(
    custom_id: &str,
    expected_table: &str,
) -> Result<PaginationToken, PaginationValidationError> {
    let token = parse_custom_id(custom_id).ok_or(PaginationValidationError::Invalid)?;

    if token.table != expected_table {
        return Err(PaginationValidationError::WrongTable);
    }

    Ok(token)
}

/// Build the custom ID of a jump prompt.
pub fn build_jump_custom_id(table: &str, total_pages: usize) -> String {
    format!("{JUMP_TOKEN_PREFIX}:{table}:{total_pages}")
}

/// Parse a jump prompt submission of the form `pgm:<table>:<total> <page>`.
pub fn parse_jump_submission(raw: &str) -> Option<JumpSubmission> {
    let mut words = raw.split_whitespace();
    let custom_id = words.next()?;
    let entered_page = words.next()?.parse::<i64>().ok()?;
    if words.next().is_some() {
        return None;
    }

    let mut parts = custom_id.split(':');
    if parts.next()? != JUMP_TOKEN_PREFIX {
        return None;
    }

    let table = parts.next().filter(|table| !table.is_empty())?.to_owned();
    let total_pages_hint = parts.next()?.parse::<usize>().ok()?;

    if parts.next().is_some() {
        return None;
    }

    Some(JumpSubmission {
        table,
        total_pages_hint,
        entered_page,
    })
}
