/*
 * module: error
 */

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TwisterError {
    #[error("InvalidStateLength: expected 624 words, got {len}")]
    InvalidStateLength { len: usize },
}
