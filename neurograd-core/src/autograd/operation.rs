use std::fmt;

/// The closed set of differentiable operations a node can be produced by.
///
/// `None` marks a leaf: a value created directly by the caller, with no parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operation {
    #[default]
    None,
    Add,
    Sub,
    Mul,
    /// Raise to a scalar exponent. The exponent is stored on the node, not as a parent.
    Pow,
    Tanh,
}

impl Operation {
    /// Number of parent links a node with this operation carries.
    pub fn arity(&self) -> usize {
        match self {
            Operation::None => 0,
            Operation::Pow | Operation::Tanh => 1,
            Operation::Add | Operation::Sub | Operation::Mul => 2,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Operation::None)
    }

    /// Short symbol used in node names and graph dumps.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::None => "",
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Pow => "^",
            Operation::Tanh => "tanh",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
