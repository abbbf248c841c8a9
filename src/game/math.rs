use crate::error::AnswerError;
use crate::math::{Grade, MathOp, MathProblem};

use super::Game;

impl Game {
    /// Generates and stores a fresh problem for the given operator,
    /// replacing any current one.
    pub fn new_problem(&self, op: MathOp) -> MathProblem {
        let problem = MathProblem::generate(op, &mut *self.rng.lock());
        *self.problem.lock() = Some(problem);
        problem
    }

    /// Grades a raw answer against the current problem.
    ///
    /// An incorrect or invalid answer leaves the problem in place so it can
    /// be retried. A correct answer increments the score, arms the one-shot
    /// advantage for player 1's next top-level round, and replaces the
    /// problem with a fresh one of the same operator.
    ///
    /// # Errors
    ///
    /// Returns an error if no problem has been generated yet.
    pub fn submit_answer(&self, raw_input: &str) -> Result<Grade, AnswerError> {
        let problem = (*self.problem.lock()).ok_or(AnswerError::NoProblem)?;

        let grade = problem.grade(raw_input);
        if grade == Grade::Correct {
            *self.math_score.lock() += 1;
            *self.advantage.lock() = true;

            let next = MathProblem::generate(problem.op, &mut *self.rng.lock());
            *self.problem.lock() = Some(next);
        }

        Ok(grade)
    }

    /// Returns the current problem, if one has been generated.
    pub fn current_problem(&self) -> Option<MathProblem> {
        *self.problem.lock()
    }

    /// Returns the number of correctly answered problems since the game was
    /// created. Survives re-deals.
    pub fn math_score(&self) -> u32 {
        *self.math_score.lock()
    }
}
