//! Operation vocabulary and token parsing.
//!
//! A token is `NAME` or `NAME:PARAM`, with `PARAM` optionally split into two
//! sub-parts by `|`. Names are case-insensitive. Parsing is deliberately
//! permissive about dispatch and strict about shape: an unknown name, or a
//! recognized name missing its parameter, is simply not an operation (the
//! column passes through untouched), while a parameter that is present but
//! malformed aborts the whole run.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OpParseError {
    #[error("operation `{token}` requires a numeric parameter, got `{param}`")]
    NonNumericParam { token: String, param: String },
    #[error("operation `{token}` expects a `<a>|<b>` parameter")]
    MalformedPair { token: String },
    #[error("operation `{token}`: pad fill must be a single character")]
    InvalidFill { token: String },
}

/// One parsed operation, carrying its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// Strip leading/trailing whitespace.
    Trim,
    /// Uppercase the whole value.
    Upper,
    /// Uppercase the first character, lowercase the rest.
    Capitalize,
    /// Keep the first `width` characters.
    Left { width: usize },
    /// Right-justify to `width`, padding on the left with `fill`.
    Lpad { width: usize, fill: char },
    /// Literal substring replacement, all occurrences.
    Replace { from: String, to: String },
    /// Remove every non-digit character.
    CleanPhone,
    /// Replace empty/null-like/missing values with `default`.
    Coalesce { default: String },
    /// Parse as number, truncate to integer; unparseable becomes 0.
    CastInt,
    /// Parse as number; unparseable becomes 0.0.
    CastFloat,
    /// Parse as number and divide; unparseable becomes missing.
    Divide { divisor: f64 },
    /// Parse as date, reformat to two-digit-year `YYMMDD`; unparseable
    /// becomes missing.
    DtToYymmdd,
    /// Report a finding if any value fails numeric parsing. No mutation.
    ValidateNumeric,
    /// Report a finding if any value is empty or missing. No mutation.
    ValidateNotNull,
}

impl Op {
    /// Parse one token. `Ok(None)` is the silent pass-through: unknown names
    /// and recognized names without their parameter dispatch to nothing.
    pub fn parse(token: &str) -> Result<Option<Self>, OpParseError> {
        let (name, param) = match token.split_once(':') {
            Some((name, param)) => (name, Some(param)),
            None => (token, None),
        };
        let name = name.trim().to_ascii_uppercase();

        let op = match name.as_str() {
            "TRIM" => Self::Trim,
            "UPPER" => Self::Upper,
            "CAPITALIZE" => Self::Capitalize,
            "CLEAN_PHONE" => Self::CleanPhone,
            "DT_TO_YYMMDD" => Self::DtToYymmdd,
            "LEFT" => match param {
                Some(param) => Self::Left {
                    width: parse_width(token, param)?,
                },
                None => return Ok(None),
            },
            "LPAD" => match param {
                Some(param) => {
                    let (width, fill) = split_pair(token, param)?;
                    Self::Lpad {
                        width: parse_width(token, width)?,
                        fill: parse_fill(token, fill)?,
                    }
                }
                None => return Ok(None),
            },
            "REPLACE" => match param {
                Some(param) => {
                    let (from, to) = split_pair(token, param)?;
                    Self::Replace {
                        from: from.to_string(),
                        to: to.to_string(),
                    }
                }
                None => return Ok(None),
            },
            "COALESCE" => match param {
                Some(param) => Self::Coalesce {
                    default: param.to_string(),
                },
                None => return Ok(None),
            },
            // CAST and VALIDATE sub-names are exact: `CAST:int` dispatches to
            // nothing, same as the original configuration dialect.
            "CAST" => match param {
                Some("INT") => Self::CastInt,
                Some("FLOAT") => Self::CastFloat,
                _ => return Ok(None),
            },
            "VALIDATE" => match param {
                Some("NUMERIC") => Self::ValidateNumeric,
                Some("NOT_NULL") => Self::ValidateNotNull,
                _ => return Ok(None),
            },
            "DIVIDE" => match param {
                Some(param) => Self::Divide {
                    divisor: parse_divisor(token, param)?,
                },
                None => return Ok(None),
            },
            _ => return Ok(None),
        };
        Ok(Some(op))
    }

    /// Human-readable name for logging.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Trim => "TRIM",
            Self::Upper => "UPPER",
            Self::Capitalize => "CAPITALIZE",
            Self::Left { .. } => "LEFT",
            Self::Lpad { .. } => "LPAD",
            Self::Replace { .. } => "REPLACE",
            Self::CleanPhone => "CLEAN_PHONE",
            Self::Coalesce { .. } => "COALESCE",
            Self::CastInt => "CAST:INT",
            Self::CastFloat => "CAST:FLOAT",
            Self::Divide { .. } => "DIVIDE",
            Self::DtToYymmdd => "DT_TO_YYMMDD",
            Self::ValidateNumeric => "VALIDATE:NUMERIC",
            Self::ValidateNotNull => "VALIDATE:NOT_NULL",
        }
    }
}

/// Parse a whole token list, dropping the tokens that dispatch to nothing.
pub fn parse_sequence<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Op>, OpParseError> {
    let mut ops = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Some(op) = Op::parse(token.as_ref())? {
            ops.push(op);
        }
    }
    Ok(ops)
}

fn split_pair<'p>(token: &str, param: &'p str) -> Result<(&'p str, &'p str), OpParseError> {
    let parts: Vec<&str> = param.split('|').collect();
    match parts.as_slice() {
        [first, second] => Ok((first, second)),
        _ => Err(OpParseError::MalformedPair {
            token: token.to_string(),
        }),
    }
}

fn parse_width(token: &str, param: &str) -> Result<usize, OpParseError> {
    param
        .trim()
        .parse()
        .map_err(|_| OpParseError::NonNumericParam {
            token: token.to_string(),
            param: param.to_string(),
        })
}

fn parse_divisor(token: &str, param: &str) -> Result<f64, OpParseError> {
    param
        .trim()
        .parse()
        .map_err(|_| OpParseError::NonNumericParam {
            token: token.to_string(),
            param: param.to_string(),
        })
}

fn parse_fill(token: &str, param: &str) -> Result<char, OpParseError> {
    let mut chars = param.chars();
    match (chars.next(), chars.next()) {
        (Some(fill), None) => Ok(fill),
        _ => Err(OpParseError::InvalidFill {
            token: token.to_string(),
        }),
    }
}
