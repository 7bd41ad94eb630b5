//! Template formatting: custom character-class masks and dates.
//!
//! A template edit never starts from a blank string; it splices the edit
//! into the previous formatted value, reduces the result to the raw
//! characters occupying dynamic positions, then re-renders the whole
//! template. Removed characters are overwritten with a sentinel first so
//! that surviving characters keep their template alignment until the reduce
//! step. Typed characters overwrite the character at the slot they land in;
//! the mask grows only by appending.

use std::sync::Arc;

use crate::class::CharacterClass;
use crate::definition::{MaskDefinition, TemplateSpec};
use crate::engine::Formatted;
use crate::intent::EditIntent;

/// Marks a removed character in the working buffer. The classifier never
/// lets a control character through, so this cannot collide with input.
const REMOVED: char = '\u{1}';

pub(crate) fn apply(
    spec: &TemplateSpec,
    text: &str,
    (start, end): (usize, usize),
    intent: &EditIntent,
    last_valid: &str,
) -> Formatted {
    let mut work: Vec<char> = text.chars().collect();
    let template: Vec<char> = spec.text.chars().collect();
    let registry = &spec.registry;

    // Splice the edit into the working buffer, marking removals.
    let mut pos;
    let mut typed: Option<char> = None;
    match intent {
        EditIntent::Insert(c) => {
            for slot in &mut work[start..end] {
                *slot = REMOVED;
            }
            pos = start;
            typed = Some(*c);
        }
        EditIntent::DeleteBackward => {
            if start == end {
                if start == 0 {
                    return unchanged(text, 0);
                }
                work[start - 1] = REMOVED;
                pos = start - 1;
            } else {
                for slot in &mut work[start..end] {
                    *slot = REMOVED;
                }
                pos = start;
            }
        }
        EditIntent::DeleteForward => {
            if start == end {
                if start >= work.len() {
                    return unchanged(text, start);
                }
                work[start] = REMOVED;
                pos = start;
            } else {
                for slot in &mut work[start..end] {
                    *slot = REMOVED;
                }
                pos = start;
            }
        }
    }

    // Scan for the slot that takes the typed character: auto-emit literals
    // the buffer hasn't reached yet, let the user type a literal verbatim,
    // and skip past validator slots that reject the character so a later
    // open slot can take it.
    let mut displaced: Option<(usize, char)> = None;
    if let Some(c) = typed {
        let mut scan = pos;
        let mut consumed_literal = false;
        loop {
            if scan >= template.len() {
                return Formatted::Reject; // no slot takes the character
            }
            let def_ch = template[scan];
            match registry.resolve(def_ch) {
                None => {
                    if c == def_ch {
                        consumed_literal = true;
                        break;
                    }
                    if scan >= work.len() {
                        work.push(def_ch);
                    }
                    scan += 1;
                }
                Some(CharacterClass::Validator(accept)) if !accept(c) => scan += 1,
                Some(_) => break,
            }
        }
        if !consumed_literal {
            if scan + 1 >= work.len() {
                work.truncate(scan);
                work.push(c);
            } else {
                if work[scan] != REMOVED {
                    displaced = Some((scan, work[scan]));
                }
                work[scan] = c;
            }
        }
        pos = scan + 1;
    }

    // Reduce to the raw characters at dynamic positions.
    let mut raw: Vec<char> = Vec::new();
    for (i, &ch) in work.iter().enumerate() {
        if i >= template.len() {
            break;
        }
        if registry.is_dynamic(template[i]) && ch != REMOVED {
            raw.push(ch);
        }
    }

    // Re-render the template over the raw characters. A key handler may
    // swap the definition mid-render; the remaining positions then resolve
    // against the replacement template and registry.
    let mut current_template = template;
    let mut current_text = spec.text.clone();
    let mut current_registry = Arc::clone(&spec.registry);
    let mut new_definition: Option<MaskDefinition> = None;

    let mut out = String::new();
    let mut j = 0;
    let mut i = 0;
    while i < current_template.len() {
        if j == raw.len() {
            break;
        }
        let def_ch = current_template[i];
        match current_registry.resolve(def_ch).cloned() {
            None => out.push(def_ch),
            Some(CharacterClass::Validator(accept)) => {
                let c = raw[j];
                if accept(c) {
                    out.push(c);
                } else if let Some((p, d)) = displaced
                    && p == i
                {
                    // A rejected overwrite keeps the character it displaced.
                    out.push(d);
                    pos = pos.saturating_sub(1);
                } else {
                    j += 1;
                    continue; // drop the raw character, retry this slot
                }
                j += 1;
            }
            Some(CharacterClass::KeyHandler(handler)) => {
                let mut partial = out.clone();
                partial.push(raw[j]);
                match handler(&partial, last_valid, &current_text) {
                    Ok(output) => {
                        out = output.value;
                        if let Some(mask) = output.mask {
                            if let Err(err) = mask.validate() {
                                log::warn!(
                                    "key handler returned an invalid replacement mask \
                                     ({err}); keeping the current mask and rejecting \
                                     the edit"
                                );
                                return Formatted::Reject;
                            }
                            let Some(replacement) = mask.template_spec() else {
                                log::warn!(
                                    "key handler returned a non-template replacement \
                                     mask; keeping the current mask and rejecting the \
                                     edit"
                                );
                                return Formatted::Reject;
                            };
                            current_template = replacement.text.chars().collect();
                            current_text = replacement.text.clone();
                            current_registry = Arc::clone(&replacement.registry);
                            new_definition = Some(mask);
                        }
                    }
                    Err(err) => {
                        log::warn!("key handler failed ({err}); rejecting the edit");
                        return Formatted::Reject;
                    }
                }
                j += 1;
            }
        }
        i += 1;
    }

    // When an insert lands at the end and only literals remain, complete
    // them and advance the caret past (auto-advance over trailing literals).
    let mut caret = pos;
    let out_len = out.chars().count();
    if matches!(intent, EditIntent::Insert(_)) && caret >= out_len {
        let from = out_len.min(current_template.len());
        let all_static = current_template[from..]
            .iter()
            .all(|&c| !current_registry.is_dynamic(c));
        if all_static {
            for &c in &current_template[from..] {
                out.push(c);
            }
            caret = out.chars().count();
        }
    }

    let caret = caret.min(out.chars().count());
    Formatted::Accept {
        value: out,
        caret,
        new_definition,
    }
}

fn unchanged(text: &str, caret: usize) -> Formatted {
    Formatted::Accept {
        value: text.to_string(),
        caret,
        new_definition: None,
    }
}
