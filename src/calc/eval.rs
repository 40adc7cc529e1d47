//! Multi-pass evaluator.
//!
//! Function calls are resolved to numbers first.  The remaining operands
//! and operators are kept as two ordered lists and reduced one precedence
//! tier at a time, left to right:
//!
//! 1. `^`
//! 2. `*` `/`
//! 3. `+` `-`
//!
//! Each reduction folds `operands[i] op operands[i + 1]` into
//! `operands[i]` and drops operator `i`.  Exactly one operand must remain.

use log::debug;

use super::token::{Operator, Tier, Token};
use crate::error::EvalError;

impl Operator {
    /// Apply to two operands.  Division by exactly zero is an error; every
    /// other operation follows IEEE-754 double semantics.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div if rhs == 0.0 => Err(EvalError::DivisionByZero),
            Self::Div => Ok(lhs / rhs),
            Self::Pow => Ok(lhs.powf(rhs)),
        }
    }
}

/// Reduce a token sequence to a single value.
pub fn evaluate(tokens: &[Token]) -> Result<f64, EvalError> {
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut operands = Vec::with_capacity(tokens.len());
    let mut operators = Vec::with_capacity(tokens.len() / 2);

    for token in tokens {
        match *token {
            Token::Number(v) => operands.push(v),
            Token::Call { func, degrees } => operands.push(func.apply_degrees(degrees)),
            Token::Operator(op) => operators.push(op),
        }
    }

    for tier in Tier::ALL {
        reduce_tier(&mut operands, &mut operators, tier)?;
    }

    match operands.as_slice() {
        [value] => {
            debug!("evaluated {} tokens to {}", tokens.len(), value);
            Ok(*value)
        }
        rest => Err(EvalError::Unbalanced { operands: rest.len() }),
    }
}

fn reduce_tier(
    operands: &mut Vec<f64>,
    operators: &mut Vec<Operator>,
    tier: Tier,
) -> Result<(), EvalError> {
    let mut i = 0;
    while i < operators.len() {
        let op = operators[i];
        if op.tier() != tier {
            i += 1;
            continue;
        }
        if i + 1 >= operands.len() {
            return Err(EvalError::MissingOperand);
        }
        let rhs = operands.remove(i + 1);
        operands[i] = op.apply(operands[i], rhs)?;
        operators.remove(i);
    }
    Ok(())
}
