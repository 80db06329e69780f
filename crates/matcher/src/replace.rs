use std::ops::Range;

use crate::types::Span;

/// One step of a replacement: copy an unmatched input range, or substitute
/// a matched span.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Piece<'m, T> {
    Keep(Range<usize>),
    Replace(Span<'m, T>),
}

/// Lay out the output of a replacement over `len` input elements.
///
/// `spans` must be in increasing start order. A span starting before the end
/// of the previously substituted one is dropped, so every input element is
/// either kept once or covered by exactly one substituted span.
pub(crate) fn plan<'m, T>(spans: &[Span<'m, T>], len: usize) -> Vec<Piece<'m, T>> {
    let mut pieces = Vec::with_capacity(spans.len() * 2 + 1);
    let mut last = 0;
    for span in spans {
        if span.start < last {
            continue;
        }
        if span.start > last {
            pieces.push(Piece::Keep(last..span.start));
        }
        pieces.push(Piece::Replace(*span));
        last = span.end;
    }
    if last < len {
        pieces.push(Piece::Keep(last..len));
    }
    pieces
}
