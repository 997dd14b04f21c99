//! Selection of the binary operation to run on two loaded matrices

use std::fmt;
use std::str::FromStr;

use num_traits::Num;

use crate::error::{MatrixError, Result};
use crate::matrix::config::MultiplyConfig;
use crate::matrix::SparseMatrix;

/// One of the three supported binary operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Lower-case name, also accepted by `from_str`
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Position in the interactive menu, starting at 1
    pub fn menu_number(&self) -> usize {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
        }
    }

    /// Prompt text listing every operation with its menu number
    pub fn menu() -> String {
        let mut menu = String::from("Available operations:\n");
        for op in Self::ALL {
            menu.push_str(&format!("{}. {}\n", op.menu_number(), op.name()));
        }
        menu.push_str("Enter the number corresponding to the operation to perform: ");
        menu
    }

    /// Runs the operation as `a <op> b`
    pub fn apply<T>(
        &self,
        a: &SparseMatrix<T>,
        b: &SparseMatrix<T>,
        config: &MultiplyConfig,
    ) -> Result<SparseMatrix<T>>
    where
        T: Copy + Num + Send + Sync,
    {
        match self {
            Operation::Add => a.add(b),
            Operation::Subtract => a.subtract(b),
            Operation::Multiply => a.multiply_with(b, config),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = MatrixError;

    /// Accepts a menu number or an operation name, ignoring case and
    /// surrounding whitespace
    fn from_str(s: &str) -> Result<Self> {
        let selection = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|op| selection == op.name() || selection == op.menu_number().to_string())
            .ok_or_else(|| MatrixError::UnknownOperation(s.trim().to_string()))
    }
}
