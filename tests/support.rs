use longcalc::{
    error::RuntimeError,
    util::{
        arena::LinearAllocator,
        matrix::Matrix,
        words::{TokenListener, Word, scan, words},
    },
};
use pretty_assertions::assert_eq;

const TEXT: &str = "
  strinh34s 1234  -3445 56474 dsfasfgbbljkdfglkdf

  fgdfgd;
  fggdfg;;  +56547 \r
  -45666\t\0
    ";

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl TokenListener for Recorder {
    fn on_start(&mut self) {
        self.events.push("BEGIN".to_string());
    }

    fn on_finish(&mut self) {
        self.events.push("END".to_string());
    }

    fn on_number(&mut self, value: i64) {
        self.events.push(format!("#{value}#"));
    }

    fn on_string(&mut self, value: &str) {
        self.events.push(format!("<{value}>"));
    }
}

#[derive(Default)]
struct NumbersOnly {
    numbers: Vec<i64>,
}

impl TokenListener for NumbersOnly {
    fn on_number(&mut self, value: i64) {
        self.numbers.push(value);
    }
}

#[test]
fn arena_serves_until_exhausted() {
    let mut arena = LinearAllocator::new(127);
    let sizes = [1, 2, 4, 8, 16, 32, 64];

    for _ in 0..3 {
        let handles: Vec<_> = sizes.iter().map(|&size| arena.allocate(size).unwrap()).collect();
        assert_eq!(arena.remaining(), 0);
        assert!(arena.allocate(1).is_none());

        let offsets: Vec<usize> = handles.iter().map(|h| h.offset()).collect();
        assert_eq!(offsets, vec![0, 1, 3, 7, 15, 31, 63]);
        assert!(handles.iter().zip(sizes).all(|(h, size)| h.len() == size));

        arena.reset();
        assert_eq!(arena.remaining(), arena.capacity());
    }
}

#[test]
fn arena_refuses_degenerate_requests() {
    let mut empty = LinearAllocator::new(0);
    assert!(empty.allocate(1).is_none());
    empty.reset();
    assert!(empty.allocate(1).is_none());

    let mut arena = LinearAllocator::new(8);
    assert!(arena.allocate(0).is_none());
    assert!(arena.allocate(9).is_none());
    assert_eq!(arena.remaining(), 8);
}

#[test]
fn arena_allocations_do_not_overlap() {
    let mut arena = LinearAllocator::new(8);
    let first = arena.allocate(4).unwrap();
    let second = arena.allocate(4).unwrap();

    arena.get_mut(first).unwrap().fill(0xAA);
    arena.get_mut(second).unwrap().fill(0x55);

    assert_eq!(arena.get(first), Some(&[0xAA; 4][..]));
    assert_eq!(arena.get(second), Some(&[0x55; 4][..]));
}

#[test]
fn arena_handles_expire_on_reset() {
    let mut arena = LinearAllocator::new(4);
    let stale = arena.allocate(4).unwrap();
    arena.get_mut(stale).unwrap().copy_from_slice(b"old!");

    arena.reset();
    let fresh = arena.allocate(4).unwrap();

    assert_eq!(stale.offset(), fresh.offset());
    assert!(arena.get(stale).is_none());
    assert!(arena.get_mut(stale).is_none());
    assert_eq!(arena.get(fresh), Some(&[0; 4][..]));
}

#[test]
fn scan_reports_words_in_order() {
    let mut recorder = Recorder::default();
    scan(TEXT, &mut recorder).unwrap();

    assert_eq!(recorder.events,
               vec!["BEGIN",
                    "<strinh34s>",
                    "#1234#",
                    "<-3445>",
                    "#56474#",
                    "<dsfasfgbbljkdfglkdf>",
                    "<fgdfgd;>",
                    "<fggdfg;;>",
                    "<+56547>",
                    "<-45666>",
                    "END"]);
}

#[test]
fn scan_with_partial_listener() {
    let mut numbers = NumbersOnly::default();
    scan(TEXT, &mut numbers).unwrap();
    assert_eq!(numbers.numbers, vec![1234, 56474]);

    let mut recorder = Recorder::default();
    scan("", &mut recorder).unwrap();
    assert_eq!(recorder.events, vec!["BEGIN", "END"]);
}

#[test]
fn scan_stops_on_oversized_number() {
    let mut recorder = Recorder::default();
    let err = scan("ok 12 99999999999999999999 later", &mut recorder).unwrap_err();

    assert_eq!(err, RuntimeError::LiteralTooLarge { position: 6 });
    assert_eq!(recorder.events, vec!["BEGIN", "<ok>", "#12#"]);
}

#[test]
fn words_iterator_is_lazy() {
    let mut iter = words("7 x 99999999999999999999 y");
    assert_eq!(iter.next(), Some(Ok(Word::Number(7))));
    assert_eq!(iter.next(), Some(Ok(Word::String("x"))));
    assert_eq!(iter.next(), Some(Err(RuntimeError::LiteralTooLarge { position: 4 })));
    assert_eq!(words(" \t\r\n\0 ").count(), 0);
    assert_eq!(words("9223372036854775807").next(), Some(Ok(Word::Number(i64::MAX))));
}

#[test]
fn matrix_elements_are_addressable() {
    let mut m = Matrix::new(3, 5);
    assert_eq!((m.rows(), m.cols()), (3, 5));
    assert_eq!(m.get(2, 4), Ok(0));

    m.set(1, 2, 42).unwrap();
    *m.get_mut(2, 4).unwrap() += 7;
    assert_eq!(m.get(1, 2), Ok(42));
    assert_eq!(m.get(2, 4), Ok(7));

    assert_eq!(m.get(3, 0),
               Err(RuntimeError::IndexOutOfBounds { row:  3,
                                                    col:  0,
                                                    rows: 3,
                                                    cols: 5, }));
    assert!(m.set(0, 5, 1).is_err());
    assert!(m.get_mut(9, 9).is_err());
}

#[test]
fn matrix_equality_compares_shape_and_values() {
    let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let mut b = a.clone();
    assert_eq!(a, b);

    b.set(1, 1, 5).unwrap();
    assert_ne!(a, b);

    assert_ne!(Matrix::new(2, 3), Matrix::new(3, 2));
    assert_eq!(Matrix::new(0, 4).rows(), 0);
}

#[test]
fn matrix_scale_is_all_or_nothing() {
    let mut m = Matrix::from_rows(vec![vec![1, -2], vec![i64::MAX / 2, 0]]).unwrap();
    m.scale(2).unwrap();
    assert_eq!(m.get(0, 1), Ok(-4));

    let before = m.clone();
    assert_eq!(m.scale(3), Err(RuntimeError::Overflow));
    assert_eq!(m, before);

    m.scale(0).unwrap();
    assert_eq!(m, Matrix::new(2, 2));
}

#[test]
fn matrix_text_round_trip() {
    let m: Matrix = "\n 1 2 3\n\n-4 5 -6 \n".parse().unwrap();
    assert_eq!(m, Matrix::from_rows(vec![vec![1, 2, 3], vec![-4, 5, -6]]).unwrap());
    assert_eq!(m.to_string(), "1 2 3\n-4 5 -6");
    assert_eq!(m.to_string().parse::<Matrix>(), Ok(m));
}

#[test]
fn matrix_text_errors() {
    assert!(matches!("1 2\n3".parse::<Matrix>(), Err(RuntimeError::InvalidArgument { .. })));
    assert!(matches!("1 x".parse::<Matrix>(), Err(RuntimeError::InvalidArgument { .. })));
    assert_eq!("1 2\n3 99999999999999999999".parse::<Matrix>(),
               Err(RuntimeError::LiteralTooLarge { position: 6 }));
}
