//! Test-only evaluator for the formulas the workbook contains.
//!
//! Supports number and string literals, cell/range/whole-column references
//! (optionally sheet-qualified, quoted or not), `+ - * / &`, comparisons,
//! and the functions `SUM`, `SUMIF`, `SUMIFS`, `COUNTIF`, `IF`, `MONTH`,
//! `INDEX` and `MATCH`. Dates evaluate to Excel serial numbers.

#![allow(dead_code)]

use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;
use transport_workbook::model::reference::column_index;
use transport_workbook::model::{CellRange, CellRef, CellValue, Document};

const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Value {
    fn to_number(&self) -> Result<f64, String> {
        match self {
            Value::Empty => Ok(0.0),
            Value::Number(n) => Ok(*n),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Text(t) => t
                .trim()
                .parse()
                .map_err(|_| format!("#VALUE! cannot use {t:?} as a number")),
        }
    }

    fn to_text(&self) -> String {
        match self {
            Value::Empty => String::new(),
            Value::Number(n) => n.to_string(),
            Value::Text(t) => t.clone(),
            Value::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        }
    }

    fn truthy(&self) -> Result<bool, String> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Ok(other.to_number()? != 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Area {
    Cell(CellRef),
    Range(CellRange),
    Column(u16),
}

#[derive(Debug, Clone, PartialEq)]
struct Reference {
    sheet: Option<String>,
    area: Area,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Text(String),
    Func(String),
    Ref(Reference),
    Op(&'static str),
    LParen,
    RParen,
    Comma,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.' || c == '$'
}

fn read_word(chars: &[char], start: usize) -> (String, usize) {
    let mut end = start;
    while end < chars.len() && is_word_char(chars[end]) {
        end += 1;
    }
    (chars[start..end].iter().collect(), end)
}

fn read_area(chars: &[char], start: usize) -> Result<(Area, usize), String> {
    let (first, next) = read_word(chars, start);
    let first = first.replace('$', "");
    if chars.get(next) != Some(&':') {
        let cell = CellRef::parse(&first).ok_or_else(|| format!("bad reference {first}"))?;
        return Ok((Area::Cell(cell), next));
    }

    let (second, after) = read_word(chars, next + 1);
    let second = second.replace('$', "");
    if let (Some(a), Some(b)) = (column_index(&first), column_index(&second)) {
        if a != b {
            return Err(format!("multi-column range {first}:{second} is not supported"));
        }
        return Ok((Area::Column(a), after));
    }
    let range = CellRange::parse(&format!("{first}:{second}"))
        .ok_or_else(|| format!("bad range {first}:{second}"))?;
    Ok((Area::Range(range), after))
}

fn tokenize(src: &str) -> Result<Vec<Token>, String> {
    let chars: Vec<char> = src.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' => i += 1,
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
            '"' => {
                let mut text = String::new();
                i += 1;
                loop {
                    match chars.get(i) {
                        None => return Err("unterminated string".to_string()),
                        Some('"') if chars.get(i + 1) == Some(&'"') => {
                            text.push('"');
                            i += 2;
                        }
                        Some('"') => {
                            i += 1;
                            break;
                        }
                        Some(ch) => {
                            text.push(*ch);
                            i += 1;
                        }
                    }
                }
                tokens.push(Token::Text(text));
            }
            '\'' => {
                let mut sheet = String::new();
                i += 1;
                loop {
                    match chars.get(i) {
                        None => return Err("unterminated sheet name".to_string()),
                        Some('\'') if chars.get(i + 1) == Some(&'\'') => {
                            sheet.push('\'');
                            i += 2;
                        }
                        Some('\'') => {
                            i += 1;
                            break;
                        }
                        Some(ch) => {
                            sheet.push(*ch);
                            i += 1;
                        }
                    }
                }
                if chars.get(i) != Some(&'!') {
                    return Err(format!("expected ! after '{sheet}'"));
                }
                let (area, next) = read_area(&chars, i + 1)?;
                tokens.push(Token::Ref(Reference {
                    sheet: Some(sheet),
                    area,
                }));
                i = next;
            }
            '+' | '-' | '*' | '/' | '&' | '=' => {
                tokens.push(Token::Op(match c {
                    '+' => "+",
                    '-' => "-",
                    '*' => "*",
                    '/' => "/",
                    '&' => "&",
                    _ => "=",
                }));
                i += 1;
            }
            '<' => match chars.get(i + 1) {
                Some('=') => {
                    tokens.push(Token::Op("<="));
                    i += 2;
                }
                Some('>') => {
                    tokens.push(Token::Op("<>"));
                    i += 2;
                }
                _ => {
                    tokens.push(Token::Op("<"));
                    i += 1;
                }
            },
            '>' => {
                if chars.get(i + 1) == Some(&'=') {
                    tokens.push(Token::Op(">="));
                    i += 2;
                } else {
                    tokens.push(Token::Op(">"));
                    i += 1;
                }
            }
            c if is_word_char(c) => {
                let (word, next) = read_word(&chars, i);
                match chars.get(next) {
                    Some('!') => {
                        let (area, after) = read_area(&chars, next + 1)?;
                        tokens.push(Token::Ref(Reference {
                            sheet: Some(word),
                            area,
                        }));
                        i = after;
                    }
                    Some('(') => {
                        tokens.push(Token::Func(word.to_uppercase()));
                        i = next;
                    }
                    _ if word.starts_with(|c: char| c.is_ascii_digit()) => {
                        let number = word.parse().map_err(|_| format!("bad number {word}"))?;
                        tokens.push(Token::Number(number));
                        i = next;
                    }
                    _ => {
                        let (area, after) = read_area(&chars, i)?;
                        tokens.push(Token::Ref(Reference { sheet: None, area }));
                        i = after;
                    }
                }
            }
            other => return Err(format!("unexpected character {other:?}")),
        }
    }
    Ok(tokens)
}

#[derive(Debug, Clone)]
enum Expr {
    Number(f64),
    Text(String),
    Ref(Reference),
    Neg(Box<Expr>),
    Binary(&'static str, Box<Expr>, Box<Expr>),
    Call(String, Vec<Expr>),
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn peek_op(&self, ops: &[&str]) -> Option<&'static str> {
        match self.peek() {
            Some(Token::Op(op)) if ops.contains(op) => Some(*op),
            _ => None,
        }
    }

    fn comparison(&mut self) -> Result<Expr, String> {
        let mut left = self.concat()?;
        while let Some(op) = self.peek_op(&["=", "<>", "<", ">", "<=", ">="]) {
            self.pos += 1;
            let right = self.concat()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn concat(&mut self) -> Result<Expr, String> {
        let mut left = self.additive()?;
        while let Some(op) = self.peek_op(&["&"]) {
            self.pos += 1;
            let right = self.additive()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn additive(&mut self) -> Result<Expr, String> {
        let mut left = self.term()?;
        while let Some(op) = self.peek_op(&["+", "-"]) {
            self.pos += 1;
            let right = self.term()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Expr, String> {
        let mut left = self.unary()?;
        while let Some(op) = self.peek_op(&["*", "/"]) {
            self.pos += 1;
            let right = self.unary()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, String> {
        if self.peek_op(&["-"]).is_some() {
            self.pos += 1;
            return Ok(Expr::Neg(Box::new(self.unary()?)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, String> {
        match self.next() {
            Some(Token::Number(n)) => Ok(Expr::Number(n)),
            Some(Token::Text(t)) => Ok(Expr::Text(t)),
            Some(Token::Ref(r)) => Ok(Expr::Ref(r)),
            Some(Token::LParen) => {
                let inner = self.comparison()?;
                match self.next() {
                    Some(Token::RParen) => Ok(inner),
                    other => Err(format!("expected ), found {other:?}")),
                }
            }
            Some(Token::Func(name)) => {
                if self.next() != Some(Token::LParen) {
                    return Err(format!("expected ( after {name}"));
                }
                let mut args = Vec::new();
                if self.peek() == Some(&Token::RParen) {
                    self.pos += 1;
                    return Ok(Expr::Call(name, args));
                }
                loop {
                    args.push(self.comparison()?);
                    match self.next() {
                        Some(Token::Comma) => continue,
                        Some(Token::RParen) => break,
                        other => return Err(format!("expected , or ) in {name}, found {other:?}")),
                    }
                }
                Ok(Expr::Call(name, args))
            }
            other => Err(format!("unexpected token {other:?}")),
        }
    }
}

fn parse(formula: &str) -> Result<Expr, String> {
    let mut parser = Parser {
        tokens: tokenize(formula.trim_start_matches('='))?,
        pos: 0,
    };
    let expr = parser.comparison()?;
    if parser.pos != parser.tokens.len() {
        return Err(format!("trailing tokens in {formula}"));
    }
    Ok(expr)
}

fn excel_serial(date: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).expect("epoch");
    (date - epoch).num_days() as f64
}

fn month_of_serial(serial: f64) -> Result<f64, String> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).expect("epoch");
    let date = epoch
        .checked_add_signed(chrono::Duration::days(serial.trunc() as i64))
        .ok_or_else(|| format!("serial {serial} out of range"))?;
    Ok(f64::from(date.month()))
}

/// Normalise empty cells against the other operand, as Excel does.
fn normalise(left: Value, right: Value) -> (Value, Value) {
    match (left, right) {
        (Value::Empty, Value::Text(t)) => (Value::Text(String::new()), Value::Text(t)),
        (Value::Text(t), Value::Empty) => (Value::Text(t), Value::Text(String::new())),
        (Value::Empty, other) => (Value::Number(0.0), other),
        (other, Value::Empty) => (other, Value::Number(0.0)),
        pair => pair,
    }
}

fn compare(left: Value, right: Value) -> Option<Ordering> {
    match normalise(left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(&b),
        (Value::Text(a), Value::Text(b)) => Some(a.to_lowercase().cmp(&b.to_lowercase())),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(&b)),
        (Value::Number(_), Value::Text(_)) => Some(Ordering::Less),
        (Value::Text(_), Value::Number(_)) => Some(Ordering::Greater),
        _ => None,
    }
}

/// Criteria match for SUMIF(S): plain equality, text case-insensitive.
fn matches(cell: &Value, criterion: &Value) -> bool {
    match (cell, criterion) {
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Text(a), Value::Text(b)) => a.to_lowercase() == b.to_lowercase(),
        (Value::Bool(a), Value::Bool(b)) => a == b,
        _ => false,
    }
}

/// COUNTIF criteria: a text criterion may start with a comparison operator
/// (`">-130000"`); anything else falls back to [`matches`].
fn meets(cell: &Value, criterion: &Value) -> bool {
    let Value::Text(text) = criterion else {
        return matches(cell, criterion);
    };
    let Some((op, operand)) = ["<>", ">=", "<=", ">", "<", "="]
        .iter()
        .find_map(|op| text.strip_prefix(op).map(|rest| (*op, rest)))
    else {
        return matches(cell, criterion);
    };
    let operand = match operand.parse::<f64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::Text(operand.to_string()),
    };
    let ordering = match (cell, &operand) {
        (Value::Number(_), Value::Number(_)) | (Value::Text(_), Value::Text(_)) => {
            compare(cell.clone(), operand)
        }
        _ => return op == "<>",
    };
    match (op, ordering) {
        (_, None) => false,
        ("<>", Some(o)) => o != Ordering::Equal,
        (">=", Some(o)) => o != Ordering::Less,
        ("<=", Some(o)) => o != Ordering::Greater,
        (">", Some(o)) => o == Ordering::Greater,
        ("<", Some(o)) => o == Ordering::Less,
        (_, Some(o)) => o == Ordering::Equal,
    }
}

fn numbers(values: &[Value]) -> impl Iterator<Item = f64> + '_ {
    values.iter().filter_map(|v| match v {
        Value::Number(n) => Some(*n),
        _ => None,
    })
}

/// Evaluates cells of a [`Document`] on demand.
pub struct Evaluator<'a> {
    doc: &'a Document,
}

impl<'a> Evaluator<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self { doc }
    }

    /// Value of `sheet!a1`; panics with the evaluation error.
    pub fn value(&self, sheet: &str, a1: &str) -> Value {
        let at = CellRef::parse(a1).unwrap_or_else(|| panic!("bad address {a1}"));
        self.cell_value(sheet, at, 0)
            .unwrap_or_else(|e| panic!("{sheet}!{a1}: {e}"))
    }

    pub fn number(&self, sheet: &str, a1: &str) -> f64 {
        match self.value(sheet, a1) {
            Value::Number(n) => n,
            other => panic!("{sheet}!{a1} is {other:?}, not a number"),
        }
    }

    pub fn text(&self, sheet: &str, a1: &str) -> String {
        self.value(sheet, a1).to_text()
    }

    /// Evaluate a free-standing formula as if it sat on `sheet`.
    pub fn formula(&self, sheet: &str, formula: &str) -> Result<Value, String> {
        let expr = parse(formula)?;
        self.eval(&expr, sheet, 0)
    }

    fn cell_value(&self, sheet: &str, at: CellRef, depth: usize) -> Result<Value, String> {
        if depth > MAX_DEPTH {
            return Err("formula nesting too deep (cycle?)".to_string());
        }
        let model = self
            .doc
            .sheet(sheet)
            .ok_or_else(|| format!("#REF! unknown sheet {sheet}"))?;
        let Some(cell) = model.cell(at.row, at.col) else {
            return Ok(Value::Empty);
        };
        match &cell.value {
            CellValue::Text(t) => Ok(Value::Text(t.clone())),
            CellValue::Number(n) => Ok(Value::Number(*n)),
            CellValue::Date(d) => Ok(Value::Number(excel_serial(*d))),
            CellValue::Formula(f) => {
                let expr = parse(f)?;
                self.eval(&expr, sheet, depth + 1)
            }
        }
    }

    fn area_values(&self, reference: &Reference, sheet: &str, depth: usize) -> Result<Vec<Value>, String> {
        let sheet = reference.sheet.as_deref().unwrap_or(sheet);
        let cells: Vec<CellRef> = match reference.area {
            Area::Cell(at) => vec![at],
            Area::Range(range) => (range.first.row..=range.last.row)
                .flat_map(|row| (range.first.col..=range.last.col).map(move |col| CellRef::new(row, col)))
                .collect(),
            Area::Column(col) => {
                let model = self
                    .doc
                    .sheet(sheet)
                    .ok_or_else(|| format!("#REF! unknown sheet {sheet}"))?;
                match model.max_row() {
                    Some(last) => (0..=last).map(|row| CellRef::new(row, col)).collect(),
                    None => Vec::new(),
                }
            }
        };
        cells
            .into_iter()
            .map(|at| self.cell_value(sheet, at, depth + 1))
            .collect()
    }

    fn list(&self, expr: &Expr, sheet: &str, depth: usize) -> Result<Vec<Value>, String> {
        match expr {
            Expr::Ref(reference) => self.area_values(reference, sheet, depth),
            other => Ok(vec![self.eval(other, sheet, depth)?]),
        }
    }

    fn eval(&self, expr: &Expr, sheet: &str, depth: usize) -> Result<Value, String> {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Text(t) => Ok(Value::Text(t.clone())),
            Expr::Ref(reference) => match reference.area {
                Area::Cell(at) => {
                    let target = reference.sheet.as_deref().unwrap_or(sheet);
                    self.cell_value(target, at, depth + 1)
                }
                _ => Err("range used where a single value is expected".to_string()),
            },
            Expr::Neg(inner) => Ok(Value::Number(-self.eval(inner, sheet, depth)?.to_number()?)),
            Expr::Binary(op, left, right) => {
                let left = self.eval(left, sheet, depth)?;
                let right = self.eval(right, sheet, depth)?;
                match *op {
                    "+" => Ok(Value::Number(left.to_number()? + right.to_number()?)),
                    "-" => Ok(Value::Number(left.to_number()? - right.to_number()?)),
                    "*" => Ok(Value::Number(left.to_number()? * right.to_number()?)),
                    "/" => {
                        let divisor = right.to_number()?;
                        if divisor == 0.0 {
                            return Err("#DIV/0!".to_string());
                        }
                        Ok(Value::Number(left.to_number()? / divisor))
                    }
                    "&" => Ok(Value::Text(left.to_text() + &right.to_text())),
                    cmp => {
                        let ordering = compare(left, right);
                        let result = match cmp {
                            "=" => ordering == Some(Ordering::Equal),
                            "<>" => ordering != Some(Ordering::Equal),
                            "<" => ordering == Some(Ordering::Less),
                            ">" => ordering == Some(Ordering::Greater),
                            "<=" => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
                            ">=" => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
                            other => return Err(format!("unknown operator {other}")),
                        };
                        Ok(Value::Bool(result))
                    }
                }
            }
            Expr::Call(name, args) => self.call(name, args, sheet, depth),
        }
    }

    fn call(&self, name: &str, args: &[Expr], sheet: &str, depth: usize) -> Result<Value, String> {
        let arg = |i: usize| args.get(i).ok_or_else(|| format!("{name} needs argument {}", i + 1));

        match name {
            "SUM" => {
                let mut total = 0.0;
                for expr in args {
                    match expr {
                        Expr::Ref(_) => total += numbers(&self.list(expr, sheet, depth)?).sum::<f64>(),
                        other => total += self.eval(other, sheet, depth)?.to_number()?,
                    }
                }
                Ok(Value::Number(total))
            }
            "SUMIFS" => {
                if args.len() < 3 || args.len() % 2 == 0 {
                    return Err("SUMIFS takes a sum range and criteria pairs".to_string());
                }
                let sums = self.list(arg(0)?, sheet, depth)?;
                let mut criteria = Vec::new();
                for pair in args[1..].chunks(2) {
                    let range = self.list(&pair[0], sheet, depth)?;
                    let criterion = self.eval(&pair[1], sheet, depth)?;
                    criteria.push((range, criterion));
                }
                let total = sums
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| {
                        criteria
                            .iter()
                            .all(|(range, criterion)| range.get(*i).is_some_and(|v| matches(v, criterion)))
                    })
                    .filter_map(|(_, v)| match v {
                        Value::Number(n) => Some(*n),
                        _ => None,
                    })
                    .sum();
                Ok(Value::Number(total))
            }
            "SUMIF" => {
                let range = self.list(arg(0)?, sheet, depth)?;
                let criterion = self.eval(arg(1)?, sheet, depth)?;
                let sums = match args.get(2) {
                    Some(expr) => self.list(expr, sheet, depth)?,
                    None => range.clone(),
                };
                let total = range
                    .iter()
                    .zip(&sums)
                    .filter(|(v, _)| matches(v, &criterion))
                    .filter_map(|(_, s)| match s {
                        Value::Number(n) => Some(*n),
                        _ => None,
                    })
                    .sum();
                Ok(Value::Number(total))
            }
            "IF" => {
                if self.eval(arg(0)?, sheet, depth)?.truthy()? {
                    self.eval(arg(1)?, sheet, depth)
                } else {
                    match args.get(2) {
                        Some(expr) => self.eval(expr, sheet, depth),
                        None => Ok(Value::Bool(false)),
                    }
                }
            }
            "MONTH" => {
                let serial = self.eval(arg(0)?, sheet, depth)?;
                if let Value::Text(t) = &serial {
                    return Err(format!("#VALUE! MONTH of text {t:?}"));
                }
                Ok(Value::Number(month_of_serial(serial.to_number()?)?))
            }
            "COUNTIF" => {
                let range = self.list(arg(0)?, sheet, depth)?;
                let criterion = self.eval(arg(1)?, sheet, depth)?;
                let count = range.iter().filter(|v| meets(v, &criterion)).count();
                Ok(Value::Number(count as f64))
            }
            "INDEX" => {
                let values = self.list(arg(0)?, sheet, depth)?;
                let n = self.eval(arg(1)?, sheet, depth)?.to_number()? as usize;
                n.checked_sub(1)
                    .and_then(|i| values.get(i))
                    .cloned()
                    .ok_or_else(|| "#REF! INDEX out of range".to_string())
            }
            "MATCH" => {
                let needle = self.eval(arg(0)?, sheet, depth)?;
                let values = self.list(arg(1)?, sheet, depth)?;
                values
                    .iter()
                    .position(|v| compare(v.clone(), needle.clone()) == Some(Ordering::Equal))
                    .map(|i| Value::Number((i + 1) as f64))
                    .ok_or_else(|| "#N/A no match".to_string())
            }
            other => Err(format!("#NAME? unsupported function {other}")),
        }
    }
}
