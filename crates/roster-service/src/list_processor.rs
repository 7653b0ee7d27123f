//! Derives the visible page of users from the full record set.
//!
//! The pipeline is filter, then sort, then paginate. It is pure: the same
//! records and query always produce the same page.

use roster_core::{ListQuery, Page, SortOrder, User, UserField};
use std::cmp::Reverse;

/// Filters, sorts and slices `records` according to `query`.
///
/// `query.current_page` is used as given; clamping it into range is the
/// caller's job. A page past the end (or page 0) yields no rows.
#[must_use]
pub fn process<'a>(records: &'a [User], query: &ListQuery) -> Page<&'a User> {
    let mut list: Vec<&User> = match query.active_search() {
        Some(text) => {
            let needle = text.to_lowercase();
            records.iter().filter(|user| matches_search(user, &needle)).collect()
        }
        None => records.iter().collect(),
    };

    if let Some(key) = query.sort_key {
        sort_by_field(&mut list, key, query.sort_order);
    }

    let total_items = list.len();
    let size = query.page_size.get();
    let visible = match query.current_page.checked_sub(1) {
        Some(index) => list.into_iter().skip(index.saturating_mul(size)).take(size).collect(),
        None => Vec::new(),
    };

    Page::new(visible, query.current_page, query.page_size, total_items)
}

/// Number of pages the query would produce; at least one.
#[must_use]
pub fn total_pages(records: &[User], query: &ListQuery) -> usize {
    process(records, query).total_pages()
}

/// True if `needle` (already lowercased) occurs in any of the four text fields.
fn matches_search(user: &User, needle: &str) -> bool {
    UserField::ALL
        .iter()
        .any(|field| user.field(*field).to_lowercase().contains(needle))
}

/// Stable sort on the lowercased field value; ties keep their input order
/// in both directions.
fn sort_by_field(list: &mut [&User], key: UserField, order: SortOrder) {
    match order {
        SortOrder::Asc => list.sort_by_cached_key(|user| user.field(key).to_lowercase()),
        SortOrder::Desc => list.sort_by_cached_key(|user| Reverse(user.field(key).to_lowercase())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{PageSize, UserId};

    fn user(id: i64, first: &str, last: &str, email: &str, department: &str) -> User {
        User {
            id: UserId::from(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            department: department.to_string(),
        }
    }

    fn sample() -> Vec<User> {
        vec![
            user(1, "Leanne", "Graham", "sincere@april.biz", "Sales"),
            user(2, "ervin", "Howell", "shanna@melissa.tv", "Engineering"),
            user(3, "Clementine", "Bauch", "nathan@yesenia.net", "Sales"),
            user(4, "Patricia", "Lebsack", "julianne@kory.org", "Support"),
            user(5, "Chelsey", "Dietrich", "lucio@annie.ca", "Engineering"),
        ]
    }

    fn many(count: i64) -> Vec<User> {
        (1..=count)
            .map(|i| user(i, &format!("User{i}"), "Test", &format!("u{i}@example.com"), "General"))
            .collect()
    }

    fn ids(page: &Page<&User>) -> Vec<i64> {
        page.content
            .iter()
            .map(|u| match &u.id {
                UserId::Number(n) => n.as_i64().unwrap(),
                UserId::Text(_) => panic!("numeric ids expected"),
            })
            .collect()
    }

    fn query() -> ListQuery {
        ListQuery::default()
    }

    #[test]
    fn test_no_query_returns_server_order() {
        let records = sample();
        let page = process(&records, &query());
        assert_eq!(ids(&page), vec![1, 2, 3, 4, 5]);
        assert_eq!(page.total_elements(), 5);
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_empty_records() {
        let mut q = query();
        q.search_text = "anything".to_string();
        q.sort_key = Some(UserField::Email);
        let page = process(&[], &q);
        assert!(page.is_empty());
        assert_eq!(page.total_elements(), 0);
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive_on_department() {
        let records = sample();
        let mut q = query();
        q.search_text = "eng".to_string();
        assert_eq!(ids(&process(&records, &q)), vec![2, 5]);

        q.search_text = "ENG".to_string();
        assert_eq!(ids(&process(&records, &q)), vec![2, 5]);
    }

    #[test]
    fn test_search_matches_every_field() {
        let records = sample();
        let mut q = query();
        for (text, expected) in [("leanne", 1), ("howell", 2), ("yesenia", 3), ("support", 4)] {
            q.search_text = text.to_string();
            assert_eq!(ids(&process(&records, &q)), vec![expected], "search {text}");
        }
    }

    #[test]
    fn test_blank_search_does_not_filter() {
        let records = sample();
        let mut q = query();
        q.search_text = "   ".to_string();
        assert_eq!(process(&records, &q).total_elements(), 5);
    }

    #[test]
    fn test_search_text_is_matched_untrimmed() {
        let records = sample();
        let mut q = query();
        q.search_text = "sales ".to_string();
        assert_eq!(process(&records, &q).total_elements(), 0);
    }

    #[test]
    fn test_sort_ascending_is_case_insensitive() {
        let records = sample();
        let mut q = query();
        q.sort_key = Some(UserField::FirstName);
        assert_eq!(ids(&process(&records, &q)), vec![5, 3, 2, 1, 4]);
    }

    #[test]
    fn test_sort_descending() {
        let records = sample();
        let mut q = query();
        q.sort_key = Some(UserField::LastName);
        q.sort_order = SortOrder::Desc;
        assert_eq!(ids(&process(&records, &q)), vec![4, 2, 1, 5, 3]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let records = sample();
        let mut q = query();
        q.sort_key = Some(UserField::Department);
        assert_eq!(ids(&process(&records, &q)), vec![2, 5, 1, 3, 4]);

        q.sort_order = SortOrder::Desc;
        assert_eq!(ids(&process(&records, &q)), vec![4, 1, 3, 2, 5]);
    }

    #[test]
    fn test_filter_then_sort() {
        let records = sample();
        let mut q = query();
        q.search_text = "sales".to_string();
        q.sort_key = Some(UserField::FirstName);
        assert_eq!(ids(&process(&records, &q)), vec![3, 1]);
    }

    #[test]
    fn test_pagination_boundaries() {
        let records = many(25);
        let mut q = query();
        q.page_size = PageSize::new(10).unwrap();

        let first = process(&records, &q);
        assert_eq!(first.total_pages(), 3);
        assert_eq!(first.len(), 10);
        assert!(first.info.has_next());

        q.current_page = 3;
        let last = process(&records, &q);
        assert_eq!(last.len(), 5);
        assert_eq!(ids(&last), (21..=25).collect::<Vec<_>>());
        assert!(!last.info.has_next());
    }

    #[test]
    fn test_page_past_end_is_not_clamped() {
        let records = many(25);
        let mut q = query();
        q.current_page = 4;
        let page = process(&records, &q);
        assert!(page.is_empty());
        assert_eq!(page.current_page(), 4);
        assert_eq!(page.total_pages(), 3);

        q.current_page = 0;
        assert!(process(&records, &q).is_empty());
    }

    #[test]
    fn test_process_is_idempotent() {
        let records = sample();
        let mut q = query();
        q.search_text = "e".to_string();
        q.sort_key = Some(UserField::Email);
        q.sort_order = SortOrder::Desc;
        q.page_size = PageSize::new(2).unwrap();
        q.current_page = 2;

        assert_eq!(process(&records, &q), process(&records, &q));
    }

    #[test]
    fn test_total_pages_helper() {
        let records = many(51);
        let mut q = query();
        q.page_size = PageSize::new(25).unwrap();
        assert_eq!(total_pages(&records, &q), 3);
        assert_eq!(total_pages(&[], &q), 1);
    }
}
