//! Reading printed literals back into values
//!
//! The source is tokenized with `proc-macro2` and literal tokens are
//! decoded with `syn`, so strings and numbers follow Rust's lexical rules.
//! `(a, b)` is accepted as a list alongside `[a, b]`.

use std::str::FromStr;

use indexmap::IndexMap;
use proc_macro2::{token_stream, Delimiter, Literal, TokenStream, TokenTree};

use crate::error::ReadError;
use crate::value::{Record, Value};
use crate::ReadContext;

type Tokens = std::iter::Peekable<token_stream::IntoIter>;

/// Read a single value literal with default settings.
pub fn read_value(src: &str) -> Result<Value, ReadError> {
    read_value_with(src, &ReadContext::default())
}

/// Read a single value literal.
///
/// The whole input must be consumed; anything after the value is an error.
pub fn read_value_with(src: &str, ctx: &ReadContext) -> Result<Value, ReadError> {
    let stream = TokenStream::from_str(src).map_err(|e| ReadError::Lex(e.to_string()))?;
    let mut tokens = stream.into_iter().peekable();

    let value = read_item(&mut tokens, ctx, 0)?;
    match tokens.next() {
        None => Ok(value),
        Some(tt) => Err(ReadError::TrailingInput {
            found: tt.to_string(),
        }),
    }
}

fn read_item(tokens: &mut Tokens, ctx: &ReadContext, depth: usize) -> Result<Value, ReadError> {
    match tokens.next() {
        None => Err(ReadError::UnexpectedEnd),

        Some(TokenTree::Ident(ident)) => match ident.to_string().as_str() {
            "null" => Ok(Value::Null),
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "inf" => Ok(Value::Number(f64::INFINITY)),
            "nan" => Ok(Value::Number(f64::NAN)),
            other => Err(ReadError::UnknownIdent(other.to_string())),
        },

        Some(TokenTree::Punct(p)) if p.as_char() == '-' => match tokens.next() {
            Some(TokenTree::Literal(lit)) => match read_literal(lit)? {
                Value::Number(n) => Ok(Value::Number(-n)),
                other => Err(ReadError::UnexpectedToken {
                    found: other.to_string(),
                }),
            },
            Some(TokenTree::Ident(ident)) if ident == "inf" => Ok(Value::Number(f64::NEG_INFINITY)),
            Some(tt) => Err(ReadError::UnexpectedToken {
                found: tt.to_string(),
            }),
            None => Err(ReadError::UnexpectedEnd),
        },

        Some(TokenTree::Literal(lit)) => read_literal(lit),

        Some(TokenTree::Group(group)) => {
            if depth >= ctx.max_depth {
                return Err(ReadError::TooDeep {
                    limit: ctx.max_depth,
                });
            }
            let mut inner = group.stream().into_iter().peekable();
            match group.delimiter() {
                Delimiter::Bracket | Delimiter::Parenthesis => {
                    read_list(&mut inner, ctx, depth + 1)
                }
                Delimiter::Brace => read_record(&mut inner, ctx, depth + 1),
                Delimiter::None => Err(ReadError::UnexpectedToken {
                    found: group.to_string(),
                }),
            }
        }

        Some(tt) => Err(ReadError::UnexpectedToken {
            found: tt.to_string(),
        }),
    }
}

/// Decode a string or numeric literal token.
fn read_literal(lit: Literal) -> Result<Value, ReadError> {
    let text = lit.to_string();
    match syn::Lit::new(lit) {
        syn::Lit::Str(s) if s.suffix().is_empty() => Ok(Value::string(s.value())),

        syn::Lit::Int(i) if i.suffix().is_empty() => i
            .base10_parse::<f64>()
            .map(Value::Number)
            .map_err(|_| ReadError::InvalidNumber(text)),

        syn::Lit::Float(f) if f.suffix().is_empty() => f
            .base10_parse::<f64>()
            .map(Value::Number)
            .map_err(|_| ReadError::InvalidNumber(text)),

        syn::Lit::Int(_) | syn::Lit::Float(_) => Err(ReadError::InvalidNumber(text)),

        _ => Err(ReadError::UnexpectedToken { found: text }),
    }
}

/// Consume a `,` between items. Returns false at the end of the group.
fn read_separator(tokens: &mut Tokens) -> Result<bool, ReadError> {
    match tokens.next() {
        None => Ok(false),
        Some(TokenTree::Punct(p)) if p.as_char() == ',' => Ok(tokens.peek().is_some()),
        Some(tt) => Err(ReadError::UnexpectedToken {
            found: tt.to_string(),
        }),
    }
}

fn read_list(tokens: &mut Tokens, ctx: &ReadContext, depth: usize) -> Result<Value, ReadError> {
    let mut items = Vec::new();
    if tokens.peek().is_none() {
        return Ok(Value::list(items));
    }
    loop {
        items.push(read_item(tokens, ctx, depth)?);
        if !read_separator(tokens)? {
            break;
        }
    }
    Ok(Value::list(items))
}

fn read_record(tokens: &mut Tokens, ctx: &ReadContext, depth: usize) -> Result<Value, ReadError> {
    let mut fields: IndexMap<String, Value> = IndexMap::new();
    if tokens.peek().is_none() {
        return Ok(Value::record(Record::new()));
    }
    loop {
        let name = read_field_name(tokens)?;
        match tokens.next() {
            Some(TokenTree::Punct(p)) if p.as_char() == ':' => {}
            Some(tt) => {
                return Err(ReadError::UnexpectedToken {
                    found: tt.to_string(),
                })
            }
            None => return Err(ReadError::UnexpectedEnd),
        }
        let value = read_item(tokens, ctx, depth)?;

        if fields.contains_key(&name) {
            return Err(ReadError::DuplicateField(name));
        }
        fields.insert(name, value);

        if !read_separator(tokens)? {
            break;
        }
    }
    Ok(Value::record(fields.into_iter().collect()))
}

fn read_field_name(tokens: &mut Tokens) -> Result<String, ReadError> {
    match tokens.next() {
        Some(TokenTree::Ident(ident)) => {
            let name = ident.to_string();
            if let Some(raw) = name.strip_prefix("r#") {
                return Ok(raw.to_string());
            }
            Ok(name)
        }
        Some(TokenTree::Literal(lit)) => {
            let text = lit.to_string();
            match syn::Lit::new(lit) {
                syn::Lit::Str(s) if s.suffix().is_empty() => Ok(s.value()),
                _ => Err(ReadError::UnexpectedToken { found: text }),
            }
        }
        Some(tt) => Err(ReadError::UnexpectedToken {
            found: tt.to_string(),
        }),
        None => Err(ReadError::UnexpectedEnd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_atoms() {
        assert_eq!(read_value("null").unwrap(), Value::Null);
        assert_eq!(read_value("true").unwrap(), Value::Bool(true));
        assert_eq!(read_value("2").unwrap(), Value::Number(2.0));
        assert_eq!(read_value("-2.5").unwrap(), Value::Number(-2.5));
        assert_eq!(read_value("-inf").unwrap(), Value::Number(f64::NEG_INFINITY));
        assert!(read_value("nan").unwrap().as_f64().unwrap().is_nan());
        assert_eq!(read_value(r#""a\"b""#).unwrap(), Value::string("a\"b"));
    }

    #[test]
    fn test_negative_zero_preserved() {
        let n = read_value("-0").unwrap().as_f64().unwrap();
        assert!(n == 0.0 && n.is_sign_negative());
    }

    #[test]
    fn test_parens_read_as_list() {
        assert_eq!(
            read_value("(0, 0)").unwrap(),
            Value::list(vec![Value::Number(0.0), Value::Number(0.0)])
        );
    }

    #[test]
    fn test_trailing_comma() {
        assert_eq!(
            read_value("[1,]").unwrap(),
            Value::list(vec![Value::Number(1.0)])
        );
    }

    #[test]
    fn test_suffix_rejected() {
        assert!(matches!(
            read_value("2u8"),
            Err(ReadError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_errors() {
        assert_eq!(read_value(""), Err(ReadError::UnexpectedEnd));
        assert_eq!(
            read_value("circle"),
            Err(ReadError::UnknownIdent("circle".to_string()))
        );
        assert_eq!(
            read_value("{a: 1, a: 2}"),
            Err(ReadError::DuplicateField("a".to_string()))
        );
        assert!(matches!(
            read_value("1 2"),
            Err(ReadError::TrailingInput { .. })
        ));
        assert!(matches!(read_value("[1 2]"), Err(ReadError::UnexpectedToken { .. })));
        assert!(matches!(read_value("{a 1}"), Err(ReadError::UnexpectedToken { .. })));
        assert_eq!(read_value("{a:}"), Err(ReadError::UnexpectedEnd));
        assert!(matches!(read_value("\"unterminated"), Err(ReadError::Lex(_))));
    }

    #[test]
    fn test_depth_limit() {
        let ctx = ReadContext::with_max_depth(2);
        assert!(read_value_with("[[1]]", &ctx).is_ok());
        assert_eq!(
            read_value_with("[[[1]]]", &ctx),
            Err(ReadError::TooDeep { limit: 2 })
        );
    }
}
