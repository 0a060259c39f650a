//! Behavioural properties of the navigation model and controller.

use std::cell::RefCell;
use std::rc::Rc;

use simple_ui_pagination::{
    Availability, NavItem, PageRangeCalculator, PaginationController, PaginationError,
    PaginationProps, PaginationState,
};

use NavItem::{Gap, Page};

#[test]
fn short_collections_have_no_gaps() {
    for window_size in 3..=9 {
        let calculator = PageRangeCalculator::new(window_size).unwrap();
        for total in 1..=window_size {
            for index in 0..total {
                let model = calculator.compute(index, total, None).unwrap();
                assert_eq!(model.items.len(), total);
                assert_eq!(model.gap_count(), 0);
                assert_eq!(model.pages().collect::<Vec<_>>(), (0..total).collect::<Vec<_>>());
            }
        }
    }
}

#[test]
fn computation_is_idempotent() {
    let calculator = PageRangeCalculator::default();
    let props = PaginationProps::new(PaginationState::new(17, 40).with_page_size(25));
    assert_eq!(
        calculator.compute_props(&props).unwrap(),
        calculator.compute_props(&props).unwrap()
    );
}

#[test]
fn first_page_of_ten_with_window_of_five() {
    let model = PageRangeCalculator::new(5).unwrap().compute(0, 10, None).unwrap();
    assert_eq!(model.items, vec![Page(0), Page(1), Page(2), Page(3), Gap, Page(9)]);
    assert!(model.can_go_next);
    assert!(!model.can_go_previous);
}

#[test]
fn last_page_of_ten() {
    let model = PageRangeCalculator::default().compute(9, 10, None).unwrap();
    assert!(!model.can_go_next);
    assert!(model.can_go_previous);
    assert_eq!(model.items.last(), Some(&Page(9)));
}

#[test]
fn single_page() {
    let model = PageRangeCalculator::default().compute(0, 1, None).unwrap();
    assert_eq!(model.items, vec![Page(0)]);
    assert!(!model.can_go_next);
    assert!(!model.can_go_previous);
}

#[test]
fn middle_page_of_ten() {
    let model = PageRangeCalculator::new(5).unwrap().compute(5, 10, None).unwrap();
    assert_eq!(model.items.first(), Some(&Page(0)));
    assert_eq!(model.items.last(), Some(&Page(9)));
    assert_eq!(model.items[1], Gap);
    assert_eq!(model.items[model.items.len() - 2], Gap);
    assert!(model.contains_page(4) && model.contains_page(5) && model.contains_page(6));
}

#[test]
fn explicit_flags_override_position() {
    let props = PaginationProps::new(PaginationState::new(5, 10))
        .with_availability(Availability::Explicit(false), Availability::Computed);
    let model = PageRangeCalculator::default().compute_props(&props).unwrap();
    assert!(!model.can_go_next);
    assert!(model.can_go_previous);
}

#[test]
fn invalid_inputs_fail_fast() {
    let calculator = PageRangeCalculator::default();
    assert!(matches!(
        calculator.compute(0, 0, None),
        Err(PaginationError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        calculator.compute(10, 10, None),
        Err(PaginationError::IndexOutOfRange { index: 10, total: 10 })
    ));
}

#[test]
fn navigation_to_current_page_never_notifies() {
    let calls = Rc::new(RefCell::new(0_usize));
    let sink = Rc::clone(&calls);
    let mut controller = PaginationController::new(
        PaginationProps::new(PaginationState::new(3, 10)),
        PageRangeCalculator::default(),
    )
    .unwrap()
    .on_change(move |_| *sink.borrow_mut() += 1);

    assert!(!controller.go_to(3).unwrap());
    assert_eq!(*calls.borrow(), 0);

    assert!(controller.go_to(8).unwrap());
    assert!(!controller.go_to(8).unwrap());
    assert_eq!(*calls.borrow(), 1);
}
