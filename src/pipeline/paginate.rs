//! Page windows over the sorted sequence and page-size input parsing.

use std::num::NonZeroUsize;

use thiserror::Error;

use super::GridRow;

/// One page window.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    /// 1-based page number.
    pub number: usize,
    /// `ceil(len / size)`; zero for an empty sequence.
    pub total_pages: usize,
    pub rows: &'a [GridRow],
}

impl Page<'_> {
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

pub fn total_pages(len: usize, size: NonZeroUsize) -> usize {
    len.div_ceil(size.get())
}

/// Clamps a page number into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slices `rows` into the window `[(page-1)*size, page*size)`.
pub fn paginate(rows: &[GridRow], page: usize, size: NonZeroUsize) -> Page<'_> {
    let size = size.get();
    let number = page.max(1);
    let start = ((number - 1).saturating_mul(size)).min(rows.len());
    let end = start.saturating_add(size).min(rows.len());
    Page {
        number,
        total_pages: rows.len().div_ceil(size),
        rows: &rows[start..end],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageSizeError {
    #[error("page size '{0}' is not a number")]
    NotANumber(String),
    #[error("page size must be positive, got {0}")]
    NotPositive(i64),
}

/// Parses page-size input the way an integer prefix parser would:
/// leading whitespace and sign, then digits; trailing junk is ignored.
pub fn parse_page_size(input: &str) -> Result<NonZeroUsize, PageSizeError> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return Err(PageSizeError::NotANumber(input.to_string()));
    }
    let value: i64 = digits[..end]
        .parse()
        .map_err(|_| PageSizeError::NotANumber(input.to_string()))?;
    let value = if negative { -value } else { value };
    usize::try_from(value)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(PageSizeError::NotPositive(value))
}
