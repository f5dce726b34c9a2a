//! Integration tests for the public API
//!
//! Walks through the way a data layer uses the crate: validate the
//! incoming request, fetch rows, build the result and its response body.

use pagekit::codec::{decode_cursor, decode_cursor_single, encode_cursor};
use pagekit::meta::ErrorBody;
use pagekit::{
    CursorRequest, CursorResult, PageRequest, PageResult, PaginationError, SortDirection,
    SortOption, MAX_PAGE_SIZE,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
struct Order {
    id: u32,
    created_at: String,
}

fn orders(n: u32) -> Vec<Order> {
    (1..=n)
        .map(|id| Order {
            id,
            created_at: format!("2024-01-{:02}", id % 28 + 1),
        })
        .collect()
}

/// Stand-in for a data layer: slices an in-memory table
fn fetch_page(table: &[Order], req: &PageRequest) -> PageResult<Order> {
    let items = table
        .iter()
        .skip(req.offset() as usize)
        .take(req.limit() as usize)
        .cloned()
        .collect();
    req.to_result(items, table.len() as u64)
}

/// Stand-in for a keyset query on `id`
fn fetch_after(table: &[Order], req: &CursorRequest) -> Result<CursorResult<Order>, PaginationError> {
    let after = if req.has_cursor() {
        decode_cursor_single(req.cursor())?
            .parse::<u32>()
            .map_err(|_| PaginationError::InvalidCursor)?
    } else {
        0
    };

    let mut items: Vec<Order> = table
        .iter()
        .filter(|o| o.id > after)
        .take(req.limit() as usize + 1)
        .cloned()
        .collect();
    let has_more = items.len() > req.limit() as usize;
    items.truncate(req.limit() as usize);

    let next = match (has_more, items.last()) {
        (true, Some(last)) => encode_cursor([last.id.to_string()]),
        _ => String::new(),
    };
    let prev = if req.has_cursor() {
        req.cursor().to_string()
    } else {
        String::new()
    };
    Ok(CursorResult::new(items, next, prev, has_more))
}

#[test]
fn test_offset_walk_through_dataset() {
    let table = orders(50);
    let base = PageRequest::new(1, 20)
        .unwrap()
        .with_sort([SortOption::new("id", "asc")]);

    let first = fetch_page(&table, &base);
    assert_eq!(first.items().len(), 20);
    assert_eq!(first.total_pages(), 3);
    assert!(first.has_next());
    assert!(!first.has_prev());

    let last_req = PageRequest::new(3, 20).unwrap();
    let last = fetch_page(&table, &last_req);
    assert_eq!(last.items().len(), 10);
    assert_eq!(last.items()[0].id, 41);
    assert!(!last.has_next());
    assert!(last.has_prev());
}

#[test]
fn test_offset_empty_dataset() {
    let result = fetch_page(&[], &PageRequest::with_defaults());
    assert!(result.is_empty());
    assert_eq!(result.total_pages(), 0);
    assert!(!result.has_next());
    assert!(!result.has_prev());
}

#[test]
fn test_cursor_walk_through_dataset() {
    let table = orders(45);
    let mut req = CursorRequest::new("", 20).unwrap();
    let mut seen = Vec::new();

    loop {
        let chunk = fetch_after(&table, &req).unwrap();
        seen.extend(chunk.items().iter().map(|o| o.id));
        if !chunk.has_more() {
            assert_eq!(chunk.next_cursor(), "");
            break;
        }
        req = CursorRequest::new(chunk.next_cursor(), 20).unwrap();
    }

    assert_eq!(seen, (1..=45).collect::<Vec<_>>());
}

#[test]
fn test_cursor_tampered_token_is_rejected() {
    let req = CursorRequest::new("%%%", 20).unwrap();
    assert_eq!(
        fetch_after(&orders(3), &req).unwrap_err(),
        PaginationError::InvalidCursor
    );
}

#[test]
fn test_composite_cursor() {
    let token = encode_cursor(["2024-01-01", "order-123"]);
    let req = CursorRequest::new(token.clone(), 10)
        .unwrap()
        .with_sort([SortOption::desc("created_at"), SortOption::desc("id")]);

    assert!(req.has_cursor());
    assert_eq!(decode_cursor(req.cursor()).unwrap(), vec!["2024-01-01", "order-123"]);
    assert_eq!(req.sort()[0].direction(), SortDirection::Desc);
    assert_eq!(
        decode_cursor_single(&token),
        Err(PaginationError::InvalidCursor)
    );
}

#[test]
fn test_response_bodies() {
    let result = fetch_page(&orders(3), &PageRequest::new(1, 2).unwrap());
    let body = serde_json::to_value(&result).unwrap();
    assert_eq!(
        body["meta"],
        json!({
            "page": 1,
            "page_size": 2,
            "total": 3,
            "total_pages": 2,
            "has_next": true,
            "has_prev": false
        })
    );
    assert_eq!(body["items"][1]["id"], 2);
}

#[test]
fn test_validation_error_body() {
    let err = PageRequest::new(1, i64::from(MAX_PAGE_SIZE) + 1).unwrap_err();
    let body = ErrorBody::from(&err);
    assert_eq!(body.status, 400);
    assert_eq!(body.details[0].field, "page_size");
    assert_eq!(body.details[0].code, "INVALID_PAGE_SIZE");
}

#[test]
fn test_values_are_shareable_across_threads() {
    let req = PageRequest::new(2, 10).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let req = req.clone();
            std::thread::spawn(move || req.with_sort([SortOption::asc(format!("f{i}"))]))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let sorted = handle.join().unwrap();
        assert_eq!(sorted.sort()[0].field(), format!("f{i}"));
        assert_eq!(sorted.offset(), 10);
    }
    assert!(req.sort().is_empty());
}
