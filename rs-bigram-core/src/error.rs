use thiserror::Error;

/// Errors raised by the bigram model and its helpers.
#[derive(Debug, Error)]
pub enum BigramError {
	/// The current state never appears as the first word of a bigram,
	/// so there is nothing to sample from.
	#[error("No transition available from state {state:?}")]
	NoTransition { state: String },

	/// A bounded babble performed all its steps without reaching `stop`
	/// at the requested length.
	#[error("Step budget of {steps} exhausted before reaching stop word {stop:?}")]
	StepBudgetExhausted { steps: usize, stop: String },

	/// A parallel training worker exited without sending its partial model.
	#[error("Training worker {0} did not report back")]
	WorkerFailed(usize),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type alias for the bigram crate.
pub type Result<T> = std::result::Result<T, BigramError>;
