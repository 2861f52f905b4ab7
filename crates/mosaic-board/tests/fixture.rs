//! Acceptance table: every cell reports exactly its earlier neighbors'
//! drawings while the board fills one caller at a time.

use mosaic_board::{Board, BoardError, CallerId, CanvasView, Drawing, SpiralIndex, CHUNK_COUNT};
use mosaic_topology::PriorNeighbors;

#[derive(Default, Clone, Copy)]
struct Expected {
    top: Option<u64>,
    right: Option<u64>,
    bottom: Option<u64>,
    left: Option<u64>,
}

const fn n(top: Option<u64>, right: Option<u64>, bottom: Option<u64>, left: Option<u64>) -> Expected {
    Expected { top, right, bottom, left }
}

const FIXTURE: [(u64, Expected); 27] = [
    (0, n(None, None, None, None)),
    (1, n(None, None, Some(0), None)),
    (2, n(None, None, None, Some(0))),
    (3, n(Some(0), None, None, None)),
    (4, n(None, Some(0), None, None)),
    (5, n(None, None, Some(1), None)),
    (6, n(None, None, Some(2), Some(1))),
    (7, n(None, None, None, Some(2))),
    (8, n(Some(2), None, None, Some(3))),
    (9, n(Some(3), None, None, None)),
    (10, n(Some(4), Some(3), None, None)),
    (11, n(None, Some(4), None, None)),
    (12, n(None, Some(1), Some(4), None)),
    (13, n(None, None, Some(5), None)),
    (14, n(None, None, Some(6), Some(5))),
    (15, n(None, None, Some(7), Some(6))),
    (16, n(None, None, None, Some(7))),
    (17, n(Some(7), None, None, Some(8))),
    (18, n(Some(8), None, None, Some(9))),
    (19, n(Some(9), None, None, None)),
    (20, n(Some(10), Some(9), None, None)),
    (21, n(Some(11), Some(10), None, None)),
    (22, n(None, Some(11), None, None)),
    (23, n(None, Some(12), Some(11), None)),
    (24, n(None, Some(5), Some(12), None)),
    (25, n(None, None, Some(13), None)),
    (26, n(None, None, Some(14), Some(13))),
];

fn drawing_for(value: u64) -> Drawing {
    let mut chunks = [0; CHUNK_COUNT];
    for (i, c) in chunks.iter_mut().enumerate() {
        *c = i as u64 + value + 1;
    }
    Drawing::new(chunks)
}

fn expected_view(e: &Expected) -> CanvasView {
    let content = |slot: Option<u64>| slot.map(drawing_for).unwrap_or(Drawing::EMPTY);
    CanvasView([content(e.top), content(e.right), content(e.bottom), content(e.left)])
}

#[test]
fn fixture_matches_topology() {
    for (value, e) in FIXTURE.iter() {
        let prior = PriorNeighbors::of(SpiralIndex(*value));
        let as_raw = |slot: Option<SpiralIndex>| slot.map(|s| s.value());
        assert_eq!(as_raw(prior.top()), e.top, "top of {}", value);
        assert_eq!(as_raw(prior.right()), e.right, "right of {}", value);
        assert_eq!(as_raw(prior.bottom()), e.bottom, "bottom of {}", value);
        assert_eq!(as_raw(prior.left()), e.left, "left of {}", value);
    }
}

#[test]
fn single_caller_draws_fixture_in_order() {
    let mut board = Board::new();
    board.start().unwrap();
    let caller = CallerId(7);

    for (value, e) in FIXTURE.iter() {
        let index = board.reserve_canvas(caller).unwrap();
        assert_eq!(index, SpiralIndex(*value));

        let view = board.get_my_canvas(caller).unwrap();
        assert_eq!(view, expected_view(e), "view for {}", value);

        board.draw(caller, drawing_for(*value)).unwrap();
    }

    assert_eq!(board.stats().drawn, FIXTURE.len());
}

#[test]
fn many_callers_draw_fixture_in_order() {
    let mut board = Board::new();
    board.start().unwrap();

    for (value, e) in FIXTURE.iter() {
        let caller = CallerId(1000 + value);
        board.reserve_canvas(caller).unwrap();
        assert_eq!(board.get_my_canvas(caller).unwrap(), expected_view(e));
        board.draw(caller, drawing_for(*value)).unwrap();
    }
}

#[test]
fn fifth_concurrent_reservation_is_rejected() {
    let mut board = Board::new();
    board.start().unwrap();

    board.reserve_canvas(CallerId(0)).unwrap();
    board.draw(CallerId(0), drawing_for(0)).unwrap();

    for c in 1..=4 {
        board.reserve_canvas(CallerId(c)).unwrap();
    }

    assert!(matches!(
        board.reserve_canvas(CallerId(5)),
        Err(BoardError::MaxConcurrencyReached { .. })
    ));
}

#[test]
fn drawn_cell_cannot_be_drawn_again() {
    let mut board = Board::new();
    board.start().unwrap();

    let index = board.reserve_canvas(CallerId(1)).unwrap();
    board.draw(CallerId(1), drawing_for(0)).unwrap();

    assert_eq!(
        board.draw_at(CallerId(1), index, drawing_for(1)),
        Err(BoardError::AlreadyDrawn { index })
    );
    assert_eq!(board.draw(CallerId(1), drawing_for(1)), Err(BoardError::NoReservation));
    assert_eq!(board.read(index), drawing_for(0));
}
