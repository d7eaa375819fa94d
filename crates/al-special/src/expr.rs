//! The `((...))` expression language embedded in special-day text, icon and
//! font fields.
//!
//! An expression is a left-to-right chain of integer operands joined by `+`
//! or `-`, without precedence or grouping:
//!
//! ```text
//! expr    := operand (("+" | "-") operand)*
//! operand := ["+" | "-"] (integer | identifier)
//! ident   := year | month | day | cfg.year | cfg.month   (any case)
//! ```
//!
//! `year`, `month` and `day` refer to the date the annotation lands on;
//! `cfg.year` and `cfg.month` to the configured rendering year and month.
//!
//! Substitution also reports whether any expression came out at zero or
//! below, which callers use to leave a special day out for the year.

use once_cell::sync::Lazy;
use regex::Regex;

use al_core::errors::{Error, Result};
use al_time::{Date, RenderConfig};

const IDENTIFIERS: &str = "year, month, day, cfg.year, cfg.month";

static EXPRESSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\(([^)]+)\)\)").expect("valid expression regex"));

/// Values visible to expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalContext {
    /// Date the annotation is attached to.
    pub date: Date,
    /// Configured rendering year (`cfg.year`).
    pub cfg_year: i32,
    /// Configured rendering month (`cfg.month`), 0 for a whole year.
    pub cfg_month: u8,
}

impl EvalContext {
    /// Context for `date` under `cfg`.
    pub fn new(date: Date, cfg: &RenderConfig) -> Self {
        Self {
            date,
            cfg_year: cfg.year,
            cfg_month: cfg.month_number(),
        }
    }

    fn lookup(&self, name: &str) -> Option<i64> {
        let value = match name.to_ascii_lowercase().as_str() {
            "year" => i64::from(self.date.year()),
            "month" => i64::from(self.date.month()),
            "day" => i64::from(self.date.day_of_month()),
            "cfg.year" => i64::from(self.cfg_year),
            "cfg.month" => i64::from(self.cfg_month),
            _ => return None,
        };
        Some(value)
    }
}

/// Result of substituting every expression in a template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Evaluated {
    /// Template with each `((...))` replaced by its decimal value.
    pub text: String,
    /// `true` if any expression evaluated to zero or less.
    pub skip: bool,
}

/// Replace every `((...))` in `template` with its value under `ctx`.
///
/// Text without markers is returned unchanged with `skip == false`.
///
/// # Errors
/// [`Error::ExpressionSyntax`] for the first malformed expression; nothing
/// is substituted in that case.
pub fn evaluate_template(template: &str, ctx: &EvalContext) -> Result<Evaluated> {
    let mut text = String::with_capacity(template.len());
    let mut skip = false;
    let mut last = 0;

    for caps in EXPRESSION_RE.captures_iter(template) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let value = evaluate_expression(inner.as_str(), ctx)?;
        if value <= 0 {
            skip = true;
        }
        text.push_str(&template[last..whole.start()]);
        text.push_str(&value.to_string());
        last = whole.end();
    }
    text.push_str(&template[last..]);

    Ok(Evaluated { text, skip })
}

/// Evaluate a single expression (the part between `((` and `))`).
pub fn evaluate_expression(expr: &str, ctx: &EvalContext) -> Result<i64> {
    let syntax = |what: String| Error::ExpressionSyntax(format!("{what} in {expr:?}"));

    let tokens = tokenize(expr).map_err(syntax)?;
    if tokens.is_empty() {
        return Err(syntax("empty expression".into()));
    }

    let mut tokens = tokens.into_iter().peekable();
    let mut total = operand(&mut tokens, ctx).map_err(syntax)?;
    while let Some(token) = tokens.next() {
        let op = match token {
            Token::Op(op) => op,
            other => return Err(syntax(format!("expected '+' or '-' before {other}"))),
        };
        let rhs = operand(&mut tokens, ctx).map_err(syntax)?;
        total = match op {
            Op::Add => total.checked_add(rhs),
            Op::Sub => total.checked_sub(rhs),
        }
        .ok_or_else(|| syntax("integer overflow".into()))?;
    }
    Ok(total)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Number(i64),
    Ident(&'a str),
    Op(Op),
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Ident(name) => write!(f, "{name:?}"),
            Token::Op(Op::Add) => f.write_str("'+'"),
            Token::Op(Op::Sub) => f.write_str("'-'"),
        }
    }
}

fn tokenize(expr: &str) -> std::result::Result<Vec<Token<'_>>, String> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' | '-' => {
                chars.next();
                tokens.push(Token::Op(if c == '+' { Op::Add } else { Op::Sub }));
            }
            '0'..='9' => {
                let end = scan_while(&mut chars, expr.len(), |c| c.is_ascii_digit());
                let literal = &expr[start..end];
                let n = literal
                    .parse::<i64>()
                    .map_err(|_| format!("integer literal {literal} out of range"))?;
                tokens.push(Token::Number(n));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let end = scan_while(&mut chars, expr.len(), |c| {
                    c.is_ascii_alphanumeric() || c == '_' || c == '.'
                });
                tokens.push(Token::Ident(&expr[start..end]));
            }
            other => {
                return Err(format!(
                    "unsupported operator {other:?} (only + and - are supported)"
                ))
            }
        }
    }
    Ok(tokens)
}

/// Advance past every char matching `keep`; return the byte offset reached.
fn scan_while(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    len: usize,
    keep: impl Fn(char) -> bool,
) -> usize {
    while let Some(&(i, c)) = chars.peek() {
        if !keep(c) {
            return i;
        }
        chars.next();
    }
    len
}

fn operand<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
    ctx: &EvalContext,
) -> std::result::Result<i64, String>
where
    I: Iterator<Item = Token<'a>>,
{
    let negate = match tokens.peek() {
        Some(Token::Op(op)) => {
            let negate = *op == Op::Sub;
            tokens.next();
            negate
        }
        _ => false,
    };

    let value = match tokens.next() {
        Some(Token::Number(n)) => n,
        Some(Token::Ident(name)) => ctx
            .lookup(name)
            .ok_or_else(|| format!("unknown identifier {name:?} (supported: {IDENTIFIERS})"))?,
        Some(token) => return Err(format!("unexpected {token}")),
        None => return Err("missing operand".into()),
    };
    Ok(if negate { -value } else { value })
}
