//! Arithmetic side-game: problem generation and grading.
//!
//! Solving a problem correctly arms a one-shot advantage that decides the
//! next top-level round in player 1's favor (see
//! [`Game::submit_answer`](crate::Game::submit_answer)).

use core::fmt;

use rand::Rng;

/// Arithmetic operator for generated problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MathOp {
    /// Addition: operands in 1..=50.
    #[default]
    Add,
    /// Subtraction: minuend in 1..=50, subtrahend never larger, so the
    /// answer is never negative.
    Sub,
    /// Multiplication: operands in 1..=12.
    Mul,
}

/// Result of grading one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    /// The answer matches exactly.
    Correct,
    /// The answer is a number but does not match.
    Incorrect {
        /// The answer that would have been correct.
        correct_answer: i32,
    },
    /// The input is empty or not parseable as an integer.
    Invalid,
}

/// A generated arithmetic problem.
///
/// Grading does not consume the problem; an incorrect or invalid attempt may
/// be retried against the same problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathProblem {
    /// Left operand.
    pub a: i32,
    /// Right operand.
    pub b: i32,
    /// The operator.
    pub op: MathOp,
    answer: i32,
}

impl MathProblem {
    /// Generates a problem for the given operator from the supplied
    /// random source.
    pub fn generate<R: Rng + ?Sized>(op: MathOp, rng: &mut R) -> Self {
        let (a, b) = match op {
            MathOp::Add => (rng.random_range(1..=50), rng.random_range(1..=50)),
            MathOp::Sub => {
                let a = rng.random_range(1..=50);
                (a, rng.random_range(1..=a))
            }
            MathOp::Mul => (rng.random_range(1..=12), rng.random_range(1..=12)),
        };

        let answer = match op {
            MathOp::Add => a + b,
            MathOp::Sub => a - b,
            MathOp::Mul => a * b,
        };

        Self { a, b, op, answer }
    }

    /// Returns the correct answer.
    #[must_use]
    pub const fn answer(&self) -> i32 {
        self.answer
    }

    /// Grades a raw answer string against this problem.
    ///
    /// Leading and trailing whitespace is ignored. Empty or non-numeric
    /// input is [`Grade::Invalid`], never counted as an attempt.
    #[must_use]
    pub fn grade(&self, raw_input: &str) -> Grade {
        match raw_input.trim().parse::<i32>() {
            Ok(value) if value == self.answer => Grade::Correct,
            Ok(_) => Grade::Incorrect {
                correct_answer: self.answer,
            },
            Err(_) => Grade::Invalid,
        }
    }
}

impl fmt::Display for MathProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self.op {
            MathOp::Add => '+',
            MathOp::Sub => '−',
            MathOp::Mul => '×',
        };
        write!(f, "{} {symbol} {} = ?", self.a, self.b)
    }
}
