/// Set of checks used throughout to verify the correctness of inputs and results.
pub mod assertions;
