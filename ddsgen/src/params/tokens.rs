//! Raw token handling: joins option blocks and builds the key/value map.

use std::collections::BTreeMap;

use super::{Invocation, ParamError};

/// Positional tokens that ask for help.
const HELP_WORDS: [&str; 3] = ["h", "?", "help"];

/// Option values keyed by their single-character key.
///
/// Keys iterate in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMap {
    entries: BTreeMap<char, String>,
}

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` under `key`, refusing to overwrite.
    pub fn insert(&mut self, key: char, value: impl Into<String>) -> Result<(), ParamError> {
        if self.entries.contains_key(&key) {
            return Err(ParamError::DuplicateOption(key));
        }
        self.entries.insert(key, value.into());
        Ok(())
    }

    pub fn get(&self, key: char) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: char) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse command-line tokens (program name excluded).
///
/// A token starting with `-` always swallows the following token, so
/// `-f DXT1` and `-fDXT1` are the same block. A lone trailing `-h` asks
/// for help; positional `h`, `?` and `help` do too.
pub fn parse_args<I, S>(args: I) -> Result<Invocation, ParamError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokens: Vec<String> = args.into_iter().map(Into::into).collect();
    if tokens.is_empty() {
        return Ok(Invocation::Usage);
    }

    let mut params = ParameterMap::new();
    for block in join_blocks(tokens) {
        if !block.starts_with('-') {
            if HELP_WORDS.contains(&block.as_str()) {
                return Ok(Invocation::Help);
            }
            add_positional(&mut params, block)?;
            continue;
        }

        let mut chars = block.chars();
        chars.next();
        match (chars.next(), chars.as_str()) {
            (Some(key), value) if !value.is_empty() => params.insert(key, value)?,
            (Some('h'), _) => return Ok(Invocation::Help),
            _ => return Err(ParamError::Syntax),
        }
    }

    Ok(Invocation::Convert(params))
}

fn join_blocks(tokens: Vec<String>) -> Vec<String> {
    let mut blocks = Vec::with_capacity(tokens.len());
    let mut tokens = tokens.into_iter();

    while let Some(token) = tokens.next() {
        if token.starts_with('-') {
            let mut block = token;
            if let Some(value) = tokens.next() {
                block.push_str(&value);
            }
            blocks.push(block);
        } else {
            blocks.push(token);
        }
    }

    blocks
}

/// First free slot of input then output.
fn add_positional(params: &mut ParameterMap, token: String) -> Result<(), ParamError> {
    for slot in ['i', 'o'] {
        if !params.contains(slot) {
            return params.insert(slot, token);
        }
    }
    Err(ParamError::DuplicatePositionalArgument(token))
}
