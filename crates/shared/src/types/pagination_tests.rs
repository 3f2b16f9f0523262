use super::*;

#[test]
fn test_page_request_default() {
    let request = PageRequest::default();
    assert_eq!(request.page, 1);
    assert_eq!(request.per_page, 25);
}

#[test]
fn test_page_request_offset() {
    let request = PageRequest {
        page: 1,
        per_page: 20,
    };
    assert_eq!(request.offset(), 0);

    let request = PageRequest {
        page: 3,
        per_page: 20,
    };
    assert_eq!(request.offset(), 40);
}

#[test]
fn test_page_zero_is_first_page() {
    let request = PageRequest {
        page: 0,
        per_page: 10,
    };
    assert_eq!(request.offset(), 0);
}

#[test]
fn test_page_request_limit_is_clamped() {
    let request = PageRequest {
        page: 1,
        per_page: 0,
    };
    assert_eq!(request.limit(), 1);

    let request = PageRequest {
        page: 1,
        per_page: 100_000,
    };
    assert_eq!(request.limit(), MAX_PER_PAGE as usize);
}

#[test]
fn test_paginate_middle_page() {
    let request = PageRequest {
        page: 2,
        per_page: 10,
    };
    let response = request.paginate((0..25).collect());

    assert_eq!(response.data, (10..20).collect::<Vec<_>>());
    assert_eq!(response.meta.page, 2);
    assert_eq!(response.meta.total, 25);
    assert_eq!(response.meta.total_pages, 3);
}

#[test]
fn test_paginate_past_the_end() {
    let request = PageRequest {
        page: 9,
        per_page: 10,
    };
    let response = request.paginate((0..25).collect::<Vec<i32>>());
    assert!(response.data.is_empty());
    assert_eq!(response.meta.total_pages, 3);
}

#[test]
fn test_page_response_empty() {
    let response: PageResponse<i32> = PageResponse::new(vec![], 1, 10, 0);
    assert_eq!(response.meta.total_pages, 1);
}
