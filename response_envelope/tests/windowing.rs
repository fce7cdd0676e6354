use response_envelope::{Envelope, EnvelopeOptions, Error};

fn dataset(n: i64) -> Vec<i64> {
    (1..=n).collect()
}

fn paginated(data: Vec<i64>) -> Envelope<i64> {
    Envelope::new(data, true, 200, EnvelopeOptions::default().with_paginate(true))
}

fn visible(envelope: &Envelope<i64>) -> Vec<i64> {
    envelope.data().as_slice().unwrap().to_vec()
}

#[test]
fn limit_without_pagination_takes_the_head() {
    let mut envelope = Envelope::ok(dataset(10));
    envelope.set_display_limit(3).unwrap();
    assert_eq!(visible(&envelope), vec![1, 2, 3]);
    assert_eq!(envelope.results().count, 3);
    assert!(!envelope.results().pagination.paginated);
}

#[test]
fn second_page_of_three() {
    let mut envelope = paginated(dataset(10));
    envelope.set_display_limit(3).unwrap().set_page(2, "").unwrap();
    let results = envelope.results();
    assert_eq!(visible(&envelope), vec![4, 5, 6]);
    assert_eq!(results.pagination.total_pages, 4);
    assert_eq!(results.pagination.page, 2);
    assert_eq!(results.previous_page.as_ref().unwrap().page, 1);
    assert_eq!(results.next_page.as_ref().unwrap().page, 3);
}

#[test]
fn page_after_the_last_is_out_of_range() {
    let mut envelope = paginated(dataset(10));
    envelope.set_display_limit(3).unwrap().set_page(5, "").unwrap();
    let results = envelope.results();
    assert!(visible(&envelope).is_empty());
    assert!(results.out_of_range);
    assert!(results.previous_page.is_none());
    assert!(results.next_page.is_none());
}

#[test]
fn object_data_rejects_every_window_operation() {
    let data = serde_json::json!({ "x": 1 });
    let mut envelope: Envelope<serde_json::Value> = Envelope::new(
        data,
        true,
        200,
        EnvelopeOptions::default().with_paginate(true),
    );
    assert!(matches!(
        envelope.set_display_limit(5),
        Err(Error::InvalidState(_))
    ));
    assert!(matches!(
        envelope.set_page(1, ""),
        Err(Error::InvalidState(_))
    ));
    assert!(matches!(
        envelope.limit_field(0..1),
        Err(Error::InvalidState(_))
    ));
}

#[test]
fn every_in_range_page_is_the_matching_slice() {
    for n in 0..=23usize {
        let data = dataset(n as i64);
        for limit in 1..=7usize {
            let total_pages = n.div_ceil(limit);
            let mut envelope = paginated(data.clone());
            envelope.set_display_limit(limit as i64).unwrap();
            for page in 1..=total_pages {
                envelope.set_page(page as i64, "").unwrap();
                let start = (page - 1) * limit;
                let end = (page * limit).min(n);
                let results = envelope.results();
                assert_eq!(visible(&envelope), data[start..end].to_vec());
                assert_eq!(results.pagination.total_pages, total_pages);
                assert!(!results.out_of_range);
                assert_eq!(results.previous_page.is_some(), page > 1);
                assert_eq!(results.next_page.is_some(), page < total_pages);
            }
            envelope.set_page(total_pages as i64 + 1, "").unwrap();
            assert!(envelope.results().out_of_range);
            assert!(visible(&envelope).is_empty());
        }
    }
}

#[test]
fn repeating_an_operation_changes_nothing() {
    let mut envelope = paginated(dataset(10));
    envelope.set_display_limit(4).unwrap().set_page(2, "/p/??").unwrap();
    let data = visible(&envelope);
    let results = envelope.results().clone();

    envelope.set_page(2, "/p/??").unwrap();
    assert_eq!(visible(&envelope), data);
    assert_eq!(envelope.results(), &results);

    envelope.set_display_limit(4).unwrap();
    assert_eq!(visible(&envelope), data);
    assert_eq!(envelope.results(), &results);
}

#[test]
fn limit_and_page_commute() {
    let mut limit_first = paginated(dataset(12));
    limit_first.set_display_limit(5).unwrap().set_page(2, "").unwrap();

    let mut page_first = paginated(dataset(12));
    page_first.set_page(2, "").unwrap().set_display_limit(5).unwrap();

    assert_eq!(visible(&limit_first), visible(&page_first));
    assert_eq!(limit_first.results(), page_first.results());
    assert_eq!(visible(&limit_first), vec![6, 7, 8, 9, 10]);
}

#[test]
fn field_range_bounds_later_paging() {
    let mut envelope = paginated(dataset(10));
    envelope.limit_field(2..5).unwrap();
    envelope.set_display_limit(2).unwrap().set_page(1, "").unwrap();
    assert_eq!(visible(&envelope), vec![3, 4]);
    assert_eq!(envelope.results().count, 3);
    assert_eq!(envelope.results().pagination.total_pages, 2);

    envelope.set_page(2, "").unwrap();
    assert_eq!(visible(&envelope), vec![5]);
    assert_eq!(envelope.results().previous_page.as_ref().unwrap().count, 2);
}

#[test]
fn unlimited_pagination_has_one_page() {
    let mut envelope = paginated(dataset(6));
    envelope.set_page(1, "").unwrap();
    assert_eq!(visible(&envelope), dataset(6));
    assert_eq!(envelope.results().count, 6);

    envelope.set_page(2, "").unwrap();
    assert!(visible(&envelope).is_empty());
    assert_eq!(envelope.results().count, 0);
    assert!(envelope.results().out_of_range);
}

#[test]
fn neighbour_uris_follow_the_template() {
    let mut envelope = paginated(dataset(9));
    envelope
        .set_display_limit(2)
        .unwrap()
        .set_page(3, "https://api.example.com/items?page=??&sort=asc")
        .unwrap();
    let results = envelope.results();
    assert_eq!(
        results.previous_page.as_ref().unwrap().uri.as_deref(),
        Some("https://api.example.com/items?page=2&sort=asc")
    );
    assert_eq!(
        results.next_page.as_ref().unwrap().uri.as_deref(),
        Some("https://api.example.com/items?page=4&sort=asc")
    );
}

#[test]
fn failed_operation_leaves_envelope_untouched() {
    let mut envelope = paginated(dataset(10));
    envelope.set_display_limit(3).unwrap().set_page(2, "").unwrap();
    let before = envelope.results().clone();

    assert!(envelope.set_page(3, "no-placeholder").is_err());
    assert!(envelope.set_display_limit(0).is_err());
    assert_eq!(envelope.results(), &before);
    assert_eq!(visible(&envelope), vec![4, 5, 6]);
}

#[test]
fn cloned_envelopes_window_independently() {
    let base = paginated(dataset(10));
    let mut first = base.clone();
    let mut second = base.clone();
    first.set_display_limit(5).unwrap();
    second.set_display_limit(5).unwrap().set_page(2, "").unwrap();
    assert_eq!(visible(&first), vec![1, 2, 3, 4, 5]);
    assert_eq!(visible(&second), vec![6, 7, 8, 9, 10]);
    assert_eq!(visible(&base), dataset(10));
}
