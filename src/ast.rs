/// A leaf of the expression tree.
///
/// Leaves are either integer literals taken verbatim from the source or the
/// single free variable `x`, whose value is supplied at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaf {
    /// A 64-bit signed integer literal. The tokenizer only produces
    /// non-negative values.
    Literal(i64),
    /// The variable `x`.
    Variable,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator. Higher binds tighter.
    ///
    /// | operator      | precedence |
    /// |---------------|------------|
    /// | `^`           | 4          |
    /// | `*`, `/`, `%` | 3          |
    /// | `+`, `-`      | 2          |
    ///
    /// # Example
    /// ```
    /// use exprtree::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Pow.precedence() > BinaryOperator::Mul.precedence());
    /// assert_eq!(BinaryOperator::Mod.precedence(), BinaryOperator::Div.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 4,
            Self::Mul | Self::Div | Self::Mod => 3,
            Self::Add | Self::Sub => 2,
        }
    }

    /// Returns `true` for operators that group from the right.
    ///
    /// Only `^` is right-associative, so `2 ^ 3 ^ 2` means `2 ^ (3 ^ 2)`.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }

    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of the expression tree.
///
/// The tree is a strict binary tree: every internal node owns exactly two
/// children and no node is shared. Nodes are only created by the tree builder
/// and only mutated by the transformer, which swaps the two children of an
/// internal node in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A literal or the variable.
    Leaf(Leaf),
    /// An operator applied to two subtrees.
    Internal {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Node {
    /// Creates a literal leaf.
    #[must_use]
    pub const fn literal(value: i64) -> Self {
        Self::Leaf(Leaf::Literal(value))
    }

    /// Creates the variable leaf.
    #[must_use]
    pub const fn variable() -> Self {
        Self::Leaf(Leaf::Variable)
    }

    /// Creates an internal node owning `left` and `right`.
    ///
    /// ## Example
    /// ```
    /// use exprtree::ast::{BinaryOperator, Node};
    ///
    /// let node = Node::internal(BinaryOperator::Mul, Node::variable(), Node::literal(2));
    /// assert_eq!(node.to_string(), "(* x 2)");
    /// ```
    #[must_use]
    pub fn internal(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Internal { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Returns `true` if this node is the variable leaf.
    #[must_use]
    pub const fn is_variable(&self) -> bool {
        matches!(self, Self::Leaf(Leaf::Variable))
    }

    /// The text shown for this node by the renderer: the literal's value, `x`,
    /// or the operator symbol.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Leaf(Leaf::Literal(value)) => value.to_string(),
            Self::Leaf(Leaf::Variable) => "x".to_string(),
            Self::Internal { op, .. } => op.symbol().to_string(),
        }
    }

    /// Number of nodes on the longest path from this node to a leaf. A leaf
    /// has height 1.
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    /// Returns `true` if any node of the tree uses `op`.
    #[must_use]
    pub fn contains_operator(&self, op: BinaryOperator) -> bool {
        match self {
            Self::Leaf(_) => false,
            Self::Internal { op: own,
                             left,
                             right, } => {
                *own == op || left.contains_operator(op) || right.contains_operator(op)
            },
        }
    }
}

/// Formats the tree as a prefix S-expression such as `(+ (* x 2) 1)`.
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leaf(_) => write!(f, "{}", self.label()),
            Self::Internal { op, left, right } => write!(f, "({op} {left} {right})"),
        }
    }
}
