//! Operators on handles. Every operator registers one new node per closed-set operation
//! and never mutates its operands.
//!
//! Operations outside the closed set (negation, division) are compositions of it, so the
//! backward engine only ever sees `Add`, `Sub`, `Mul`, `Pow` and `Tanh`.

use super::Value;
use crate::autograd::Operation;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl<'g> Value<'g> {
    fn derived(self, op: Operation, value: f64, rhs: Option<Value<'g>>, exponent: Option<f64>) -> Value<'g> {
        if let Some(rhs) = rhs {
            if !std::ptr::eq(self.graph, rhs.graph) {
                log::warn!(
                    "operands of '{}' belong to different graphs; {:?} will receive no gradient",
                    op,
                    rhs.id
                );
            }
        }
        let name = format!("t{}", self.graph.len());
        self.graph
            .push(name, value, op, Some(self.id), rhs.map(|r| r.id), exponent)
    }

    /// Leaf constant on the same graph, used for the scalar side of mixed operators.
    fn constant(self, value: f64) -> Value<'g> {
        self.graph.leaf(value)
    }

    /// Raises the value to the scalar power `n`.
    ///
    /// `n` is not a graph node and receives no gradient.
    /// Fractional exponents of negative bases yield NaN.
    pub fn pow(self, n: f64) -> Value<'g> {
        let value = self.value().powf(n);
        self.derived(Operation::Pow, value, None, Some(n))
    }

    /// Hyperbolic tangent.
    pub fn tanh(self) -> Value<'g> {
        let value = self.value().tanh();
        self.derived(Operation::Tanh, value, None, None)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:expr, $apply:expr) => {
        impl<'g> $trait<Value<'g>> for Value<'g> {
            type Output = Value<'g>;
            fn $method(self, rhs: Value<'g>) -> Value<'g> {
                let apply: fn(f64, f64) -> f64 = $apply;
                let value = apply(self.value(), rhs.value());
                self.derived($op, value, Some(rhs), None)
            }
        }

        impl<'g> $trait<f64> for Value<'g> {
            type Output = Value<'g>;
            fn $method(self, rhs: f64) -> Value<'g> {
                let rhs = self.constant(rhs);
                $trait::$method(self, rhs)
            }
        }

        impl<'g> $trait<Value<'g>> for f64 {
            type Output = Value<'g>;
            fn $method(self, rhs: Value<'g>) -> Value<'g> {
                let lhs = rhs.constant(self);
                $trait::$method(lhs, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, Operation::Add, |a, b| a + b);
impl_binary_op!(Sub, sub, Operation::Sub, |a, b| a - b);
impl_binary_op!(Mul, mul, Operation::Mul, |a, b| a * b);

impl<'g> Neg for Value<'g> {
    type Output = Value<'g>;
    fn neg(self) -> Value<'g> {
        self * -1.0
    }
}

impl<'g> Div<Value<'g>> for Value<'g> {
    type Output = Value<'g>;
    fn div(self, rhs: Value<'g>) -> Value<'g> {
        self * rhs.pow(-1.0)
    }
}

impl<'g> Div<f64> for Value<'g> {
    type Output = Value<'g>;
    fn div(self, rhs: f64) -> Value<'g> {
        let rhs = self.constant(rhs);
        self / rhs
    }
}

impl<'g> Div<Value<'g>> for f64 {
    type Output = Value<'g>;
    fn div(self, rhs: Value<'g>) -> Value<'g> {
        let lhs = rhs.constant(self);
        lhs / rhs
    }
}

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
