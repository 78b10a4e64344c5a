// src/expr/mod.rs
pub mod eval;

pub use eval::{evaluate, EvalError};

use thiserror::Error;

use crate::bands::BandRole;

/// Parse/validation failures for formula strings. Builtin registry
/// entries surface these at load time; they never occur per request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("unexpected character '{0}' in formula")]
    UnexpectedChar(char),
    #[error("invalid number '{0}'")]
    BadNumber(String),
    #[error("unknown token '{0}' (not a band role, parameter, or function)")]
    UnknownIdent(String),
    #[error("{name} expects {expected} argument(s), got {got}")]
    BadArity {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("expected closing parenthesis")]
    MissingParen,
    #[error("unexpected end of formula")]
    UnexpectedEnd,
    #[error("unexpected token '{0}' in formula")]
    UnexpectedToken(String),
}

/// The fixed function whitelist. Nothing outside this list is callable
/// from a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Min,
    Max,
    Abs,
    Exp,
    Sqrt,
}

impl Func {
    fn from_name(name: &str) -> Option<Func> {
        match name {
            "min" => Some(Func::Min),
            "max" => Some(Func::Max),
            "abs" => Some(Func::Abs),
            "exp" => Some(Func::Exp),
            "sqrt" => Some(Func::Sqrt),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Func::Min => "min",
            Func::Max => "max",
            Func::Abs => "abs",
            Func::Exp => "exp",
            Func::Sqrt => "sqrt",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Func::Min | Func::Max => 2,
            Func::Abs | Func::Exp | Func::Sqrt => 1,
        }
    }
}

/// A node in the formula AST. Free variables are already classified:
/// parameter names were matched against the definition's declared
/// parameters (parameters shadow role tokens), everything else had to be
/// a canonical role token.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f32),
    Role(BandRole),
    Param(String),
    Neg(Box<Expr>),
    BinOp {
        op: char,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call(Func, Vec<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f32),
    Ident(String),
    Op(char),
    LParen,
    RParen,
    Comma,
}

fn tokenize(formula: &str) -> Result<Vec<Token>, ExprError> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = formula.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            ' ' | '\t' | '\n' => {
                i += 1;
            }
            '+' | '-' | '*' | '/' => {
                tokens.push(Token::Op(chars[i]));
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            ',' => {
                tokens.push(Token::Comma);
                i += 1;
            }
            c if c.is_ascii_digit() || c == '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let num_str: String = chars[start..i].iter().collect();
                let num = num_str
                    .parse::<f32>()
                    .map_err(|_| ExprError::BadNumber(num_str))?;
                tokens.push(Token::Number(num));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push(Token::Ident(chars[start..i].iter().collect()));
            }
            c => return Err(ExprError::UnexpectedChar(c)),
        }
    }

    Ok(tokens)
}

/// Parse a formula into an AST. `params` is the definition's declared
/// parameter vocabulary; identifiers are resolved as parameter first,
/// then role token, then function name when followed by `(`.
pub fn parse(formula: &str, params: &[&str]) -> Result<Expr, ExprError> {
    let tokens = tokenize(formula)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        params,
    };
    let expr = parser.parse_expr()?;
    match parser.peek() {
        None => Ok(expr),
        Some(t) => Err(ExprError::UnexpectedToken(format!("{t:?}"))),
    }
}

/// Collect the roles a parsed formula references, in first-appearance
/// order. This is the sole source of an index's required roles.
pub fn required_roles(expr: &Expr) -> Vec<BandRole> {
    let mut roles = Vec::new();
    collect_roles(expr, &mut roles);
    roles
}

fn collect_roles(expr: &Expr, roles: &mut Vec<BandRole>) {
    match expr {
        Expr::Role(role) => {
            if !roles.contains(role) {
                roles.push(*role);
            }
        }
        Expr::Neg(inner) => collect_roles(inner, roles),
        Expr::BinOp { left, right, .. } => {
            collect_roles(left, roles);
            collect_roles(right, roles);
        }
        Expr::Call(_, args) => {
            for arg in args {
                collect_roles(arg, roles);
            }
        }
        Expr::Num(_) | Expr::Param(_) => {}
    }
}

/// Recursive descent parser for arithmetic expressions
struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    params: &'a [&'a str],
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let t = self.tokens.get(self.pos).cloned();
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    /// Parse: expr = term (('+' | '-') term)*
    fn parse_expr(&mut self) -> Result<Expr, ExprError> {
        let mut left = self.parse_term()?;

        while let Some(Token::Op(op @ ('+' | '-'))) = self.peek() {
            let op = *op;
            self.advance();
            let right = self.parse_term()?;
            left = Expr::BinOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse: term = factor (('*' | '/') factor)*
    fn parse_term(&mut self) -> Result<Expr, ExprError> {
        let mut left = self.parse_factor()?;

        while let Some(Token::Op(op @ ('*' | '/'))) = self.peek() {
            let op = *op;
            self.advance();
            let right = self.parse_factor()?;
            left = Expr::BinOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse: factor = number | ident | ident '(' args ')' | '(' expr ')' | '-' factor
    fn parse_factor(&mut self) -> Result<Expr, ExprError> {
        match self.peek().cloned() {
            Some(Token::Number(n)) => {
                self.advance();
                Ok(Expr::Num(n))
            }
            Some(Token::Ident(name)) => {
                self.advance();
                if matches!(self.peek(), Some(Token::LParen)) {
                    self.parse_call(&name)
                } else {
                    self.resolve_ident(&name)
                }
            }
            Some(Token::LParen) => {
                self.advance();
                let expr = self.parse_expr()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(expr),
                    _ => Err(ExprError::MissingParen),
                }
            }
            Some(Token::Op('-')) => {
                self.advance();
                let factor = self.parse_factor()?;
                Ok(Expr::Neg(Box::new(factor)))
            }
            Some(Token::Op('+')) => {
                self.advance();
                self.parse_factor()
            }
            Some(other) => Err(ExprError::UnexpectedToken(format!("{other:?}"))),
            None => Err(ExprError::UnexpectedEnd),
        }
    }

    fn parse_call(&mut self, name: &str) -> Result<Expr, ExprError> {
        let func = Func::from_name(name).ok_or_else(|| ExprError::UnknownIdent(name.to_string()))?;
        self.advance(); // consume '('

        let mut args = Vec::new();
        if !matches!(self.peek(), Some(Token::RParen)) {
            loop {
                args.push(self.parse_expr()?);
                match self.peek() {
                    Some(Token::Comma) => {
                        self.advance();
                    }
                    _ => break,
                }
            }
        }
        match self.advance() {
            Some(Token::RParen) => {}
            _ => return Err(ExprError::MissingParen),
        }

        if args.len() != func.arity() {
            return Err(ExprError::BadArity {
                name: func.name(),
                expected: func.arity(),
                got: args.len(),
            });
        }
        Ok(Expr::Call(func, args))
    }

    fn resolve_ident(&self, name: &str) -> Result<Expr, ExprError> {
        // Declared parameters shadow role tokens (EVI's gain `g` vs the
        // green role); anything else must be a canonical role.
        if self.params.contains(&name) {
            return Ok(Expr::Param(name.to_string()));
        }
        match BandRole::from_token(name) {
            Some(role) => Ok(Expr::Role(role)),
            None => Err(ExprError::UnknownIdent(name.to_string())),
        }
    }
}
