use crate::error::ExpansionError;
use crate::lookup::LookupStore;
use crate::scanner::{Scanner, Segment, Syntax};

/// Rewrites `name` back into the literal token a later pass can recognise.
pub fn escape(name: &str) -> String {
    format!("$({})", name)
}

/// Expands `$(NAME)` tokens in `input` against `lookup`, using the default
/// [`Syntax`].
///
/// Names set in `lookup` are replaced by their value verbatim (the value is
/// never expanded again). Names that are not set are written back as
/// `$(NAME)` for whichever pass owns them.
pub fn expand<L: LookupStore + ?Sized>(input: &str, lookup: &L) -> Result<String, ExpansionError> {
    expand_in(input, lookup, Syntax::default())
}

/// [`expand`] with an explicit [`Syntax`].
pub fn expand_in<L: LookupStore + ?Sized>(
    input: &str,
    lookup: &L,
    syntax: Syntax,
) -> Result<String, ExpansionError> {
    expand_with(input, syntax, |name| {
        if lookup.is_set(name) {
            Ok(lookup.string_value(name))
        } else {
            Ok(escape(name))
        }
    })
}

/// Expands every token in `input` through `mapping`.
///
/// The first malformed token or mapping error fails the whole call.
pub fn expand_with<F>(input: &str, syntax: Syntax, mut mapping: F) -> Result<String, ExpansionError>
where
    F: FnMut(&str) -> Result<String, String>,
{
    let mut out = String::with_capacity(input.len());
    for segment in Scanner::new(input, syntax) {
        match segment.map_err(|reason| ExpansionError::malformed(input, reason))? {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder(name) => {
                let value = mapping(name).map_err(|reason| ExpansionError::Mapping {
                    input: input.to_string(),
                    name: name.to_string(),
                    reason,
                })?;
                out.push_str(&value);
            }
        }
    }
    Ok(out)
}

/// Lists the identifiers of every token in `input`, in order of appearance.
pub fn placeholders(input: &str) -> Result<Vec<String>, ExpansionError> {
    placeholders_in(input, Syntax::default())
}

/// [`placeholders`] with an explicit [`Syntax`].
pub fn placeholders_in(input: &str, syntax: Syntax) -> Result<Vec<String>, ExpansionError> {
    let mut names = Vec::new();
    for segment in Scanner::new(input, syntax) {
        if let Segment::Placeholder(name) = segment.map_err(|reason| ExpansionError::malformed(input, reason))? {
            names.push(name.to_string());
        }
    }
    Ok(names)
}
