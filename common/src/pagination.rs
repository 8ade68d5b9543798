use serde::{Deserialize, Serialize};

use crate::error::{AppError, Res};

/// One page of an already filtered list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Cuts `items` into pages of `page_size` and returns the 1-based `page`.
///
/// A page past the end yields an empty `items` rather than an error.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Res<Page<T>> {
    if page == 0 {
        return Err(AppError::BadRequest("page starts at 1".to_string()));
    }
    if page_size == 0 {
        return Err(AppError::BadRequest(
            "pageSize must be greater than 0".to_string(),
        ));
    }

    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);
    let items = items
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .collect();

    Ok(Page {
        items,
        page,
        page_size,
        total_items,
        total_pages,
    })
}
