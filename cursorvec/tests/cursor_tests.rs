use cursorvec::{CursorVec, PeekDirection, VectorError};

fn tokens() -> CursorVec<&'static str> {
    CursorVec::from_slice(&["fn", "main", "(", ")", "{", "}"]).unwrap()
}

#[test]
fn test_read_advances_until_exhausted() {
    let mut vector = CursorVec::from_slice(&[1, 2]).unwrap();

    assert_eq!(vector.read(), Some(&1));
    assert_eq!(vector.read(), Some(&2));
    assert_eq!(vector.read(), None);
    assert_eq!(vector.read_index(), 2);
}

#[test]
fn test_read_sees_later_pushes() {
    let mut vector = CursorVec::new();
    assert_eq!(vector.read(), None);

    vector.push(5).unwrap();
    assert_eq!(vector.read(), Some(&5));
}

#[test]
fn test_rewind() {
    let mut vector = tokens();
    vector.read();
    vector.read();
    vector.rewind();
    assert_eq!(vector.read(), Some(&"fn"));
}

#[test]
fn test_read_and_peek_are_independent() {
    let mut vector = tokens();

    assert_eq!(vector.read(), Some(&"fn"));
    assert_eq!(vector.peek(), Some(&"fn"));
    assert_eq!(vector.peek(), Some(&"main"));
    assert_eq!(vector.read(), Some(&"main"));
    assert_eq!(vector.peek_index(), 2);
}

#[test]
fn test_peek_no_increment() {
    let mut vector = tokens();

    assert_eq!(vector.peek_no_increment(), Some(&"fn"));
    assert_eq!(vector.peek_no_increment(), Some(&"fn"));
    vector.peek();
    assert_eq!(vector.peek_no_increment(), Some(&"main"));
}

#[test]
fn test_peek_at_leaves_cursor() {
    let mut vector = tokens();
    vector.peek();

    assert_eq!(vector.peek_at(4), Some(&"{"));
    assert_eq!(vector.peek_at(6), None);
    assert_eq!(vector.peek_index(), 1);
}

#[test]
fn test_peek_back() {
    let mut vector = tokens();

    assert_eq!(vector.peek_back(), Err(VectorError::Underflow));
    vector.peek();
    vector.peek();
    vector.peek_back().unwrap();
    assert_eq!(vector.peek(), Some(&"main"));
}

#[test]
fn test_pop_last_peek() {
    let mut vector = tokens();

    assert_eq!(vector.pop_last_peek(), Err(VectorError::Underflow));
    vector.peek();
    vector.peek();
    assert_eq!(vector.pop_last_peek(), Ok("main"));
    assert_eq!(vector.as_slice(), &["fn", "(", ")", "{", "}"]);
    assert_eq!(vector.peek(), Some(&"("));
}

#[test]
fn test_peek_pop() {
    let mut vector = tokens();
    vector.peek();

    assert_eq!(vector.peek_pop(), Some("main"));
    assert_eq!(vector.len(), 5);
    assert_eq!(vector.peek(), Some(&"("));

    let mut empty = CursorVec::<u8>::new();
    assert_eq!(empty.peek_pop(), None);
}

#[test]
fn test_removal_before_cursors_keeps_position() {
    let mut vector = tokens();
    vector.read();
    vector.read();
    vector.read();

    vector.pop_at(0).unwrap();
    assert_eq!(vector.read(), Some(&")"));
}

#[test]
fn test_insertion_before_cursors_keeps_position() {
    let mut vector = tokens();
    vector.read();
    vector.peek();
    vector.peek();

    vector.push_at(0, "pub").unwrap();
    assert_eq!(vector.read(), Some(&"main"));
    assert_eq!(vector.peek(), Some(&"("));
}

#[test]
fn test_insertion_at_cursor_is_read_next() {
    let mut vector = tokens();
    vector.read();

    vector.push_at(1, "async").unwrap();
    assert_eq!(vector.read(), Some(&"async"));
}

#[test]
fn test_peek_value_forward() {
    let (a, b, c) = (1, 2, 3);
    let mut vector = CursorVec::from_slice(&[&a, &b, &c]).unwrap();

    assert_eq!(vector.peek_direction(), PeekDirection::Forward);
    assert_eq!(vector.peek_value(), Some(&1));
    assert_eq!(vector.peek_value(), Some(&2));
    assert_eq!(vector.peek_value_at(2), Some(&3));
    assert_eq!(vector.peek_value(), Some(&3));
    assert_eq!(vector.peek_value(), None);
}

#[test]
fn test_peek_value_backward() {
    let (a, b, c) = (1, 2, 3);
    let mut vector = CursorVec::from_slice(&[&a, &b, &c]).unwrap();
    vector.set_peek_direction(PeekDirection::Backward);
    vector.set_peek_pointer_end();

    assert_eq!(vector.peek_value(), Some(&3));
    assert_eq!(vector.peek_value(), Some(&2));
    assert_eq!(vector.peek_value(), Some(&1));
    assert_eq!(vector.peek_value(), None);
}

#[test]
fn test_explicit_head_and_tail_peeks_ignore_direction() {
    let mut vector = CursorVec::from_slice(&[10, 20, 30]).unwrap();
    vector.set_peek_direction(PeekDirection::Backward);

    assert_eq!(vector.peek_value_from_head(), Some(10));
    assert_eq!(vector.peek_value_from_head(), Some(20));
    assert_eq!(vector.peek_value_from_tail(), Some(30));
    assert_eq!(vector.peek_value_from_tail(), Some(20));
}

#[test]
fn test_set_peek_pointer() {
    let mut vector = tokens();
    vector.set_peek_pointer(3);
    assert_eq!(vector.peek(), Some(&")"));

    vector.set_peek_pointer(100);
    assert_eq!(vector.peek(), None);
    assert_eq!(vector.peek_index(), 100);
}

#[test]
fn test_reads_iterator_moves_read_cursor() {
    let mut vector = tokens();
    vector.read();

    let rest: Vec<_> = vector.reads().take(2).copied().collect();
    assert_eq!(rest, vec!["main", "("]);
    assert_eq!(vector.read_index(), 3);
    assert_eq!(vector.reads().len(), 3);
}

#[test]
fn test_pop_last_peek_backward_removes_returned_element() {
    let mut vector = CursorVec::from_slice(&[1, 2, 3]).unwrap();
    vector.set_peek_direction(PeekDirection::Backward);
    vector.set_peek_pointer_end();

    assert_eq!(vector.pop_last_peek(), Err(VectorError::Underflow));
    assert_eq!(vector.peek_value(), Some(3));
    assert_eq!(vector.pop_last_peek(), Ok(3));
    assert_eq!(vector.as_slice(), &[1, 2]);
    assert_eq!(vector.peek_value(), Some(2));
}

#[test]
fn test_pop_last_peek_backward_after_head() {
    let mut vector = CursorVec::from_slice(&[1, 2]).unwrap();
    vector.set_peek_direction(PeekDirection::Backward);
    vector.set_peek_pointer_end();
    vector.peek_value();
    vector.peek_value();

    assert_eq!(vector.pop_last_peek(), Ok(1));
    assert_eq!(vector.as_slice(), &[2]);
    assert_eq!(vector.peek_value(), None);
}

#[test]
fn test_peek_pop_ignores_backward_direction() {
    let mut vector = CursorVec::from_slice(&[1, 2, 3]).unwrap();
    vector.set_peek_direction(PeekDirection::Backward);

    assert_eq!(vector.peek_pop(), Some(1));
    assert_eq!(vector.as_slice(), &[2, 3]);
}
