//! Input tokenization.

/// A tokenized command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Command name as typed.
    pub name: String,
    /// Positional arguments, verbatim.
    pub args: Vec<String>,
}

impl Invocation {
    /// Name folded for registry lookup.
    pub fn lookup_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Split a line on runs of whitespace.
///
/// Returns `None` for blank input.
pub fn tokenize(line: &str) -> Option<Invocation> {
    let mut words = line.split_whitespace().map(str::to_string);
    let name = words.next()?;
    Some(Invocation {
        name,
        args: words.collect(),
    })
}
