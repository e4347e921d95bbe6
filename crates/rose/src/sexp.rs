//! S-expressions as trees
//!
//! A tiny reader for fixtures like `(42 (1337 foo bar) corge)`. Atoms are any
//! run of characters other than whitespace and parentheses; there is no
//! quoting or escaping.

use anyhow::{anyhow, bail, Context, Result};
use std::fmt;
use std::str::FromStr;

use crate::node::Node;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An s-expression: an atom or a parenthesized list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sexp {
    Atom(String),
    List(Vec<Sexp>),
}

impl Sexp {
    pub fn atom(text: impl Into<String>) -> Self {
        Sexp::Atom(text.into())
    }

    /// Read exactly one expression from `input`
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = tokenize(input).into_iter().peekable();
        let expr = read(&mut tokens)?;
        if let Some(extra) = tokens.next() {
            bail!("unexpected trailing input `{}`", extra);
        }
        Ok(expr)
    }

    /// The atom's text, if this is an atom
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Sexp::Atom(text) => Some(text),
            Sexp::List(_) => None,
        }
    }
}

impl FromStr for Sexp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Sexp::parse(s)
    }
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sexp::Atom(text) => write!(f, "{}", text),
            Sexp::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Reads `(label child ...)` as a container and a bare atom as a leaf
impl TryFrom<&Sexp> for Node<String> {
    type Error = anyhow::Error;

    fn try_from(expr: &Sexp) -> Result<Self> {
        match expr {
            Sexp::Atom(text) => Ok(Node::leaf(text.clone())),
            Sexp::List(items) => {
                let (label, rest) = items
                    .split_first()
                    .ok_or_else(|| anyhow!("container needs a label, found `()`"))?;
                let label = label
                    .as_atom()
                    .ok_or_else(|| anyhow!("container label must be an atom, found `{}`", label))?;
                let children = rest
                    .iter()
                    .map(Node::<String>::try_from)
                    .collect::<Result<Vec<_>>>()
                    .with_context(|| format!("in container `{}`", label))?;
                Ok(Node::container(label.to_string(), children))
            }
        }
    }
}

/// Parse `(label child ...)` text straight into a rose tree
pub fn rose(input: &str) -> Result<Node<String>> {
    let expr = Sexp::parse(input).context("failed to read tree")?;
    Node::try_from(&expr)
}

fn tokenize(input: &str) -> Vec<String> {
    input
        .replace('(', " ( ")
        .replace(')', " ) ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn read<I>(tokens: &mut std::iter::Peekable<I>) -> Result<Sexp>
where
    I: Iterator<Item = String>,
{
    let token = tokens.next().ok_or_else(|| anyhow!("unexpected end of input"))?;
    match token.as_str() {
        "(" => {
            let mut items = Vec::new();
            loop {
                match tokens.peek().map(String::as_str) {
                    Some(")") => {
                        tokens.next();
                        return Ok(Sexp::List(items));
                    }
                    Some(_) => items.push(read(tokens)?),
                    None => bail!("unclosed `(`"),
                }
            }
        }
        ")" => bail!("unexpected `)`"),
        _ => Ok(Sexp::Atom(token)),
    }
}
