use super::*;

#[test]
fn exactly_one_page_shows_everything_without_more() {
    let w = PageWindow::new(21, 1, BLOG_PAGE_SIZE);
    assert_eq!(w.shown, 21);
    assert!(!w.has_more());
}

#[test]
fn fifty_items_grow_by_one_page_per_click() {
    let first = PageWindow::new(50, 1, BLOG_PAGE_SIZE);
    assert_eq!(first.shown, 21);
    assert!(first.has_more());

    let second = PageWindow::new(50, 2, BLOG_PAGE_SIZE);
    assert_eq!(second.shown, 42);
    assert!(second.has_more());

    let third = PageWindow::new(50, 3, BLOG_PAGE_SIZE);
    assert_eq!(third.shown, 50);
    assert!(!third.has_more());
}

#[test]
fn empty_list_has_nothing_to_show() {
    let w = PageWindow::new(0, 1, BLOG_PAGE_SIZE);
    assert_eq!(w.shown, 0);
    assert!(!w.has_more());
}

#[test]
fn page_zero_is_treated_as_first_page() {
    assert_eq!(PageWindow::new(30, 0, BLOG_PAGE_SIZE).shown, 21);
}

#[test]
fn summary_mentions_both_counts() {
    assert_eq!(PageWindow::new(50, 1, BLOG_PAGE_SIZE).summary(), "Mostrando 21 de 50 campañas");
}
