//! Integer and decimal formatting.
//!
//! Both formatters build a candidate by naively splicing the edit into the
//! current text, validate it, and reject by returning [`Formatted::Reject`]
//! (the engine turns that into a revert). The decimal formatter additionally
//! re-derives the group separators on every accepted edit and reconciles the
//! caret against the separators that appeared or vanished left of it.
//!
//! All indices in this module are character indices; the engine converts to
//! byte offsets at the boundary.

use crate::engine::Formatted;
use crate::intent::EditIntent;
use crate::locale::LocaleFormats;

pub(crate) fn apply_integer(
    max_digits: u32,
    allow_negative: bool,
    text: &str,
    sel: (usize, usize),
    intent: &EditIntent,
) -> Formatted {
    if let EditIntent::Insert(c) = intent
        && !c.is_ascii_digit()
        && *c != '-'
    {
        return Formatted::Reject;
    }

    let chars: Vec<char> = text.chars().collect();
    let (candidate, caret) = splice(&chars, sel, intent);

    if !integer_valid(&candidate, allow_negative, max_digits) {
        return Formatted::Reject;
    }

    Formatted::Accept {
        value: candidate.into_iter().collect(),
        caret,
        new_definition: None,
    }
}

pub(crate) fn apply_decimal(
    max_digits: u32,
    max_decimals: u32,
    allow_negative: bool,
    text: &str,
    sel: (usize, usize),
    intent: &EditIntent,
    locale: &dyn LocaleFormats,
) -> Formatted {
    let decimal_sep = locale.decimal_separator();
    let group_sep = locale.group_separator();

    if let EditIntent::Insert(c) = intent
        && !c.is_ascii_digit()
        && *c != '-'
        && *c != decimal_sep
    {
        return Formatted::Reject;
    }

    let old: Vec<char> = text.chars().collect();
    let (candidate, caret) = splice(&old, sel, intent);

    // Group separators are display artifacts; validation ignores them.
    let stripped: Vec<char> = candidate
        .iter()
        .copied()
        .filter(|&c| c != group_sep)
        .collect();

    if !decimal_valid(&stripped, decimal_sep, allow_negative, max_digits, max_decimals) {
        return Formatted::Reject;
    }

    let value = regroup(&stripped, decimal_sep, group_sep);
    let new: Vec<char> = value.chars().collect();
    let caret = reconcile_caret(&old, &new, caret, intent, group_sep).min(new.len());

    Formatted::Accept {
        value,
        caret,
        new_definition: None,
    }
}

/// Naively apply the edit, collapsing any selection. Returns the candidate
/// and the caret immediately after the edit. A delete with nothing to
/// delete leaves the text unchanged.
fn splice(chars: &[char], (start, end): (usize, usize), intent: &EditIntent) -> (Vec<char>, usize) {
    let mut out = chars.to_vec();
    match intent {
        EditIntent::Insert(c) => {
            out.splice(start..end, [*c]);
            (out, start + 1)
        }
        EditIntent::DeleteBackward => {
            if start == end {
                if start == 0 {
                    (out, 0)
                } else {
                    out.remove(start - 1);
                    (out, start - 1)
                }
            } else {
                out.drain(start..end);
                (out, start)
            }
        }
        EditIntent::DeleteForward => {
            if start == end {
                if start < out.len() {
                    out.remove(start);
                }
                (out, start)
            } else {
                out.drain(start..end);
                (out, start)
            }
        }
    }
}

/// `^-?\d{0,max_digits}$`, with the minus gated on `allow_negative`.
fn integer_valid(chars: &[char], allow_negative: bool, max_digits: u32) -> bool {
    let mut digits = chars;
    if digits.first() == Some(&'-') {
        if !allow_negative {
            return false;
        }
        digits = &digits[1..];
    }
    digits.iter().all(|c| c.is_ascii_digit()) && digits.len() <= max_digits as usize
}

/// `^-?(\d*|\d+<sep>\d*)$` on a group-separator-free candidate, plus the
/// digit budget: total digits within `max_digits`, fractional digits within
/// `max_decimals`.
fn decimal_valid(
    chars: &[char],
    decimal_sep: char,
    allow_negative: bool,
    max_digits: u32,
    max_decimals: u32,
) -> bool {
    let mut rest = chars;
    if rest.first() == Some(&'-') {
        if !allow_negative {
            return false;
        }
        rest = &rest[1..];
    }

    let (int_part, frac_part) = match rest.iter().position(|&c| c == decimal_sep) {
        Some(p) => {
            if p == 0 {
                return false; // separator needs at least one digit before it
            }
            (&rest[..p], &rest[p + 1..])
        }
        None => (rest, &rest[rest.len()..]),
    };

    if !int_part.iter().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if !frac_part.iter().all(|c| c.is_ascii_digit()) {
        return false; // a second separator also fails here
    }

    int_part.len() + frac_part.len() <= max_digits as usize
        && frac_part.len() <= max_decimals as usize
}

/// Re-derive the grouped display: sign, integer digits in right-aligned
/// groups of three, then the decimal separator and fraction unchanged.
fn regroup(stripped: &[char], decimal_sep: char, group_sep: char) -> String {
    let mut out = String::new();
    let mut rest = stripped;
    if rest.first() == Some(&'-') {
        out.push('-');
        rest = &rest[1..];
    }

    // The tail keeps the decimal separator so it can be re-appended as is.
    let (int_part, tail) = match rest.iter().position(|&c| c == decimal_sep) {
        Some(p) => (&rest[..p], &rest[p..]),
        None => (rest, &rest[rest.len()..]),
    };

    let n = int_part.len();
    for (i, &d) in int_part.iter().enumerate() {
        if i != 0 && (n - i) % 3 == 0 {
            out.push(group_sep);
        }
        out.push(d);
    }
    out.extend(tail.iter());
    out
}

/// Adjust the naive caret for group separators that appeared or vanished
/// left of it between the old display and the new one.
///
/// The delete-forward rule (skip a separator sitting at the caret before
/// applying the retreat) is deliberately not symmetric with the backspace
/// rule; it matches how the mask has always felt to users.
fn reconcile_caret(
    old: &[char],
    new: &[char],
    caret: usize,
    intent: &EditIntent,
    group_sep: char,
) -> usize {
    let seps = |v: &[char], upto: usize| {
        v[..upto.min(v.len())]
            .iter()
            .filter(|&&c| c == group_sep)
            .count()
    };

    match intent {
        EditIntent::Insert(_) => {
            let before = seps(old, caret.saturating_sub(1));
            let after = seps(new, caret);
            if after > before { caret + 1 } else { caret }
        }
        EditIntent::DeleteBackward => {
            let before = seps(old, caret);
            let after = seps(new, caret.saturating_sub(1));
            if before > after {
                caret.saturating_sub(1)
            } else {
                caret
            }
        }
        EditIntent::DeleteForward => {
            let before = seps(old, caret);
            let after = seps(new, if caret + 1 < new.len() { caret + 1 } else { caret });
            let mut caret = caret;
            if new.get(caret) == Some(&group_sep) {
                caret += 1;
            }
            if before > after {
                caret = caret.saturating_sub(1);
            }
            caret
        }
    }
}
