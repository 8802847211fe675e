//! calcr - an infix arithmetic calculator
//!
//! # Overview
//!
//! calcr evaluates infix arithmetic expressions (`+ - * /`, parentheses,
//! decimal literals) in a single left-to-right pass over the input. There
//! is no parse tree: the scanner hands tokens straight to a two-stack
//! evaluator that defers each operator until precedence or a closing
//! parenthesis forces a reduction.
//!
//! ```text
//! 3 + 4 * 2        operands     operators
//! 3                [3]          []
//! +                [3]          [+]
//! 4                [3, 4]       [+]
//! *                [3, 4]       [+, *]    * binds tighter, + stays pending
//! 2                [3, 4, 2]    [+, *]
//! <end>            [3, 8]       [+]       reduce: 4 * 2
//!                  [11]         []        reduce: 3 + 8
//! ```
//!
//! Operators of equal precedence reduce eagerly, so evaluation is
//! left-associative: `8 - 3 - 2` is `(8 - 3) - 2`.
//!
//! Failures are a closed set of [`EvalError`] kinds; callers branch on the
//! kind, never on message text. The [`api`] module applies the service's
//! status mapping to a JSON request body.
//!
//! # Example
//!
//! ```rust
//! use calcr::{evaluate, EvalError};
//!
//! assert_eq!(evaluate("(3 + 4) * 2").unwrap(), 14.0);
//! assert_eq!(evaluate(" 8 - 3 - 2 ").unwrap(), 3.0);
//! assert_eq!(evaluate("10 / 0").unwrap_err(), EvalError::DivisionByZero);
//! ```

pub mod api;
pub mod display;
pub mod eval;
pub mod scan;

// Re-export commonly used items
pub use api::{handle, ApiResponse, CalcRequest};
pub use display::format_number;
pub use eval::{evaluate, EvalError};
pub use scan::Token;
