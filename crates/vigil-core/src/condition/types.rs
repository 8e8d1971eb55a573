//! Transient structure of a parsed condition

use std::fmt;

/// Comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Equal (==)
    Eq,
    /// Not equal (!=)
    Ne,
    /// Less than or equal (<=)
    Le,
    /// Greater than or equal (>=)
    Ge,
    /// Less than (<)
    Lt,
    /// Greater than (>)
    Gt,
}

impl Operator {
    /// Operators in matching order
    pub(crate) const ALL: [Operator; 6] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Le,
        Operator::Ge,
        Operator::Lt,
        Operator::Gt,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Le => "<=",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Gt => ">",
        }
    }

    /// Operator surrounded by the mandatory single spaces
    pub(crate) fn spaced(self) -> &'static str {
        match self {
            Operator::Eq => " == ",
            Operator::Ne => " != ",
            Operator::Le => " <= ",
            Operator::Ge => " >= ",
            Operator::Lt => " < ",
            Operator::Gt => " > ",
        }
    }

    /// Returns true for `<`, `<=`, `>` and `>=`
    pub fn is_ordering(self) -> bool {
        matches!(self, Operator::Le | Operator::Ge | Operator::Lt | Operator::Gt)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One step of a body path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// `.key`
    Key(String),
    /// `[index]`
    Index(usize),
}

/// A bracketed reference to a field of the probe result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    Status,
    Ip,
    Connected,
    ResponseTime,
    CertificateExpiration,
    DomainExpiration,
    DnsRcode,
    /// `[BODY]` followed by an optional path
    Body(Vec<PathSegment>),
}

impl Placeholder {
    pub const STATUS: &'static str = "[STATUS]";
    pub const IP: &'static str = "[IP]";
    pub const CONNECTED: &'static str = "[CONNECTED]";
    pub const RESPONSE_TIME: &'static str = "[RESPONSE_TIME]";
    pub const CERTIFICATE_EXPIRATION: &'static str = "[CERTIFICATE_EXPIRATION]";
    pub const DOMAIN_EXPIRATION: &'static str = "[DOMAIN_EXPIRATION]";
    pub const DNS_RCODE: &'static str = "[DNS_RCODE]";
    pub const BODY: &'static str = "[BODY]";
}

/// Operand shape after parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperandExpr {
    Placeholder(Placeholder),
    /// `len(<placeholder>)`
    Len(Placeholder),
    /// `has(<placeholder>)`
    Has(Placeholder),
    /// `any(v1, v2, ...)`
    Any(Vec<String>),
    /// `pat(<glob>)`
    Pattern(String),
    Literal(String),
}

/// A parsed operand together with its source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand<'a> {
    pub text: &'a str,
    pub expr: OperandExpr,
}

impl Operand<'_> {
    /// Whether the operand reads from the probe result
    pub fn is_resolved(&self) -> bool {
        matches!(
            self.expr,
            OperandExpr::Placeholder(_) | OperandExpr::Len(_) | OperandExpr::Has(_)
        )
    }
}

/// `<left> <operator> <right>`, re-derived from the condition text on every evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCondition<'a> {
    pub left: Operand<'a>,
    pub operator: Operator,
    pub right: Operand<'a>,
}
