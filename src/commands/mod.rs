//! Forkshift commands
//!
//! This module contains the implementation of forkshift CLI commands.

pub mod transfer;

pub use transfer::{
    confirm, filter_forks, is_affirmative, transfer_forks, BatchReport, TransferOutcome,
    TransferStatus,
};
