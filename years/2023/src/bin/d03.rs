use core::ops::Range;
use std::collections::HashSet;

use lib::prelude::*;

lib::entry!(input = "d03.txt", expect = (4361, 467835), solve);

/// Content of an empty cell.
const FILLER: char = '.';

/// Order in which the cells around a marker are visited, as `(row, column)`
/// deltas.
const ADJACENT: [(isize, isize); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

fn solve(input: &Input) -> Result<(u64, u64)> {
    let grid = parse_grid(input.as_data());
    debug!("parsed {} rows", grid.rows_len());

    let parts = extract(&grid, markers(&grid, is_symbol))?;
    let part1 = part_sum(&parts)?;

    let gears = extract(&grid, markers(&grid, is_gear))?;
    let part2 = gear_ratio_sum(&gears)?;

    Ok((part1, part2))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Pos {
    row: usize,
    column: usize,
}

impl Pos {
    const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    fn line_col(self) -> LineCol {
        LineCol::new(self.row, self.column)
    }
}

/// A maximal horizontal run of digits in one row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Span {
    row: usize,
    columns: Range<usize>,
    value: u64,
}

/// The numbers adjacent to a single marker, in visiting order.
///
/// A marker has eight neighbours so it can't see more than eight spans.
#[derive(Debug, Clone)]
struct Group {
    marker: Pos,
    spans: ArrayVec<Span, 8>,
}

impl Group {
    fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.spans.iter().map(|span| span.value)
    }
}

/// Split input into rows of characters.
///
/// Invalid UTF-8 decodes into replacement characters, which are then treated
/// like any other symbol.
fn parse_grid(input: &[u8]) -> LineGrid<char> {
    LineGrid::from_lines(lib::input::lines(input), |line| line.chars())
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Any non-word or non-digit character, so everything but ASCII digits
/// including letters, `_` and whitespace.
fn is_symbol(c: char) -> bool {
    !is_word(c) || !c.is_ascii_digit()
}

fn is_gear(c: char) -> bool {
    c == '*'
}

/// Positions of non-filler cells matching `predicate` in row-major order.
fn markers(
    grid: &LineGrid<char>,
    predicate: fn(char) -> bool,
) -> impl Iterator<Item = Pos> + '_ {
    grid.rows().enumerate().flat_map(move |(row, cells)| {
        cells
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c != FILLER && predicate(c))
            .map(move |(column, _)| Pos::new(row, column))
    })
}

/// Collect the numbers around every marker.
///
/// A span is claimed by the first marker in iteration order that reaches it
/// and is skipped by every later lookup in the same call, so each span is
/// counted at most once per call.
fn extract<I>(grid: &LineGrid<char>, markers: I) -> Result<Vec<Group>, InputError>
where
    I: IntoIterator<Item = Pos>,
{
    let mut groups = Vec::new();
    // Claimed spans keyed by `(row, start column)`.
    let mut claimed = HashSet::new();

    for marker in markers {
        let mut spans = ArrayVec::<Span, 8>::new();

        for delta in ADJACENT {
            let Some((row, column)) = grid.offset(marker.row, marker.column, delta) else {
                continue;
            };

            let Some(span) = number_span(grid, Pos::new(row, column))? else {
                continue;
            };

            if claimed.insert((span.row, span.columns.start)) {
                spans.push(span);
            }
        }

        groups.push(Group { marker, spans });
    }

    debug!(
        "{} markers, {} next to numbers",
        groups.len(),
        groups.iter().filter(|g| !g.spans.is_empty()).count()
    );

    Ok(groups)
}

/// Reconstruct the span of digits running through `seed`, if any.
fn number_span(grid: &LineGrid<char>, seed: Pos) -> Result<Option<Span>, InputError> {
    let Some(cells) = grid.row(seed.row) else {
        return Ok(None);
    };

    let is_digit = |column: usize| cells.get(column).is_some_and(char::is_ascii_digit);

    if !is_digit(seed.column) {
        return Ok(None);
    }

    let mut start = seed.column;

    while start > 0 && is_digit(start - 1) {
        start -= 1;
    }

    let mut end = seed.column + 1;

    while is_digit(end) {
        end += 1;
    }

    let digits = cells.get(start..end).unwrap_or_default();
    let mut value = 0u64;

    for c in digits {
        let d = u64::from(c.to_digit(10).unwrap_or_default());

        let Some(n) = value.checked_mul(10).and_then(|v| v.checked_add(d)) else {
            let digits = digits.iter().collect::<String>();
            return Err(InputError::new(
                LineCol::new(seed.row, start),
                ErrorKind::NotInteger(digits.into()),
            ));
        };

        value = n;
    }

    Ok(Some(Span {
        row: seed.row,
        columns: start..end,
        value,
    }))
}

/// Sum of every number in every group.
fn part_sum(groups: &[Group]) -> Result<u64, InputError> {
    let mut sum = 0u64;

    for group in groups {
        for value in group.values() {
            sum = sum
                .checked_add(value)
                .ok_or_else(|| overflow(group.marker))?;
        }
    }

    Ok(sum)
}

/// Sum of the products of groups with exactly two numbers.
fn gear_ratio_sum(groups: &[Group]) -> Result<u64, InputError> {
    let mut sum = 0u64;

    for group in groups {
        let [a, b] = group.spans.as_slice() else {
            continue;
        };

        sum = a
            .value
            .checked_mul(b.value)
            .and_then(|ratio| sum.checked_add(ratio))
            .ok_or_else(|| overflow(group.marker))?;
    }

    Ok(sum)
}

fn overflow(marker: Pos) -> InputError {
    InputError::new(marker.line_col(), ErrorKind::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..";

    fn run(text: &str) -> (u64, u64) {
        let input = Input::new("inputs/test.txt", text.as_bytes().to_vec());
        solve(&input).unwrap()
    }

    fn groups(text: &str, predicate: fn(char) -> bool) -> Vec<Vec<u64>> {
        let grid = parse_grid(text.as_bytes());
        let groups = extract(&grid, markers(&grid, predicate)).unwrap();
        groups.iter().map(|g| g.values().collect()).collect()
    }

    #[test]
    fn test_sample() {
        assert_eq!(run(SAMPLE), (4361, 467835));
    }

    #[test]
    fn test_shipped_input() {
        let input = lib::input::read(
            "inputs/d03.txt",
            concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/d03.txt"),
        )
        .unwrap();

        assert_eq!(solve(&input).unwrap(), (4361, 467835));
    }

    #[test]
    fn test_parse_grid() {
        let grid = parse_grid(b"1.\n*\n");
        assert_eq!(grid.rows_len(), 3);
        assert_eq!(grid.row(0), Some(&['1', '.'][..]));
        assert_eq!(grid.row(1), Some(&['*'][..]));
        assert_eq!(grid.row(2), Some(&[][..]));
    }

    #[test]
    fn test_parse_grid_empty() {
        let grid = parse_grid(b"");
        assert_eq!(grid.rows_len(), 1);
        assert_eq!(grid.columns_len(0), 0);
        assert_eq!(run(""), (0, 0));
    }

    #[test]
    fn test_parse_grid_idempotent() {
        assert_eq!(parse_grid(SAMPLE.as_bytes()), parse_grid(SAMPLE.as_bytes()));
    }

    #[test]
    fn test_parse_grid_invalid_utf8() {
        let grid = parse_grid(b"1\xff");
        assert_eq!(grid.row(0), Some(&['1', '\u{FFFD}'][..]));

        let input = Input::new("inputs/test.txt", b"1\xff".to_vec());
        assert_eq!(solve(&input).unwrap(), (1, 0));
    }

    #[test]
    fn test_markers_match_predicate() {
        let grid = parse_grid(SAMPLE.as_bytes());

        for predicate in [is_symbol as fn(char) -> bool, is_gear] {
            for pos in markers(&grid, predicate) {
                let c = *grid.get(pos.row, pos.column);
                assert_ne!(c, FILLER);
                assert!(predicate(c), "{c:?} at {pos:?}");
            }
        }
    }

    #[test]
    fn test_markers_row_major() {
        let grid = parse_grid(SAMPLE.as_bytes());

        let gears = markers(&grid, is_gear).collect::<Vec<_>>();
        assert_eq!(gears, [Pos::new(1, 3), Pos::new(4, 3), Pos::new(8, 5)]);

        let symbols = markers(&grid, is_symbol).collect::<Vec<_>>();
        assert_eq!(symbols.len(), 6);
        assert!(symbols.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_symbol_predicate() {
        for c in ['*', '#', '+', '$', '/', 'a', 'Z', '_', ' ', '\r', '\u{FFFD}'] {
            assert!(is_symbol(c), "{c:?}");
        }

        for c in '0'..='9' {
            assert!(!is_symbol(c), "{c:?}");
        }

        let grid = parse_grid(b"1.a_");
        let found = markers(&grid, is_symbol).collect::<Vec<_>>();
        assert_eq!(found, [Pos::new(0, 2), Pos::new(0, 3)]);
    }

    #[test]
    fn test_carriage_return_is_symbol() {
        assert_eq!(run("12\r\n"), (12, 0));
        assert_eq!(run("..1\r\n"), (1, 0));
    }

    #[test]
    fn test_no_adjacent_numbers() {
        assert_eq!(groups("*..\n...\n..5", is_gear), [Vec::<u64>::new()]);
        assert_eq!(run("*..\n...\n..5"), (0, 0));
    }

    #[test]
    fn test_span_counted_once_per_marker() {
        assert_eq!(groups("123\n.*.", is_gear), [vec![123]]);
        assert_eq!(groups(".*.\n123\n.45", is_gear), [vec![123]]);
    }

    #[test]
    fn test_separate_spans_in_one_row() {
        assert_eq!(groups("1.2\n.*.", is_gear), [vec![1, 2]]);
        assert_eq!(run("1.2\n.*."), (3, 2));
    }

    #[test]
    fn test_neighbour_order() {
        let found = groups(SAMPLE, is_gear);
        assert_eq!(found, [vec![35, 467], vec![617], vec![598, 755]]);
    }

    #[test]
    fn test_gear_filter() {
        assert_eq!(groups("2.3\n.*.\n4..", is_gear), [vec![2, 4, 3]]);
        assert_eq!(run("2.3\n.*.\n4.."), (9, 0));
        assert_eq!(run("5*"), (5, 0));
        assert_eq!(run("*"), (0, 0));
    }

    #[test]
    fn test_corner_marker() {
        assert_eq!(groups("*1\n23", is_gear), [vec![23, 1]]);
        assert_eq!(run("*1\n23"), (24, 23));
    }

    #[test]
    fn test_jagged_rows() {
        assert_eq!(groups("12\n.*\n9999", is_gear), [vec![9999, 12]]);
        assert_eq!(run("12\n.*\n9999"), (10011, 119988));
        assert_eq!(run("7\n.*\n"), (7, 0));
    }

    #[test]
    fn test_shared_number_claimed_by_first_marker() {
        assert_eq!(groups("*1*", is_symbol), [vec![1], vec![]]);
        assert_eq!(run("*1*"), (1, 0));

        assert_eq!(groups("2*3*4", is_gear), [vec![3, 2], vec![4]]);
        assert_eq!(run("2*3*4"), (9, 6));

        assert_eq!(groups("12.\n#*.", is_symbol), [vec![12], vec![]]);
        assert_eq!(run("12.\n#*."), (12, 0));
    }

    #[test]
    fn test_parts_claim_independently() {
        // `#` claims 5 for part one, the gear still sees it in part two.
        assert_eq!(groups("#5*6", is_symbol), [vec![5], vec![6]]);
        assert_eq!(run("#5*6"), (11, 30));
    }

    #[test]
    fn test_number_too_large() {
        let grid = parse_grid(b"99999999999999999999*");
        let error = extract(&grid, markers(&grid, is_symbol)).unwrap_err();
        assert_eq!(error.pos(), LineCol::new(0, 0));
        assert_eq!(
            error.kind(),
            &ErrorKind::NotInteger("99999999999999999999".into())
        );

        let input = Input::new("inputs/test.txt", b"..\n.99999999999999999999#".to_vec());
        let error = lib::cli::error_context(input.path(), solve(&input).unwrap_err());
        assert_eq!(error.to_string(), "inputs/test.txt:2:2");
    }

    #[test]
    fn test_largest_number() {
        assert_eq!(run("18446744073709551615*"), (u64::MAX, 0));
    }

    #[test]
    fn test_ratio_overflow() {
        let grid = parse_grid(b"4294967296*4294967296");
        let gears = extract(&grid, markers(&grid, is_gear)).unwrap();
        let error = gear_ratio_sum(&gears).unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::Overflow);
        assert_eq!(error.pos(), LineCol::new(0, 10));
    }
}
