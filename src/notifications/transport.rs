//! Delivery transports for expiry notices.
//!
//! The engine never talks to a mail server. It hands each rendered
//! [`EmailNotification`] to a [`Mailer`] and treats both `Ok(false)` and
//! `Err(_)` as an ordinary, countable failure.

use std::collections::HashSet;

use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::info;

use crate::error::{EngineError, Result};
use crate::models::EmailNotification;

/// Fallible send primitive supplied by the host.
///
/// `Ok(true)` means accepted, `Ok(false)` means rejected. Implementations
/// may block; the scheduler waits for each call before starting the next.
pub trait Mailer {
    fn send(&mut self, notification: &EmailNotification) -> Result<bool>;
}

impl<M: Mailer + ?Sized> Mailer for Box<M> {
    fn send(&mut self, notification: &EmailNotification) -> Result<bool> {
        (**self).send(notification)
    }
}

impl<M: Mailer + ?Sized> Mailer for &mut M {
    fn send(&mut self, notification: &EmailNotification) -> Result<bool> {
        (**self).send(notification)
    }
}

// ---------------------------------------------------------------------------
// LogMailer
// ---------------------------------------------------------------------------

/// Accepts every notification and logs it. Default transport.
#[derive(Debug, Default)]
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&mut self, notification: &EmailNotification) -> Result<bool> {
        info!(
            to = %notification.to,
            contract_id = %notification.contract_id,
            subject = %notification.subject,
            "expiry notice accepted"
        );
        Ok(true)
    }
}

// ---------------------------------------------------------------------------
// FaultInjectingMailer
// ---------------------------------------------------------------------------

/// Wraps another mailer and rejects a random share of sends.
///
/// The RNG is seedable so a batch's failure pattern can be reproduced.
pub struct FaultInjectingMailer<M> {
    inner: M,
    failure_rate: f64,
    rng: StdRng,
}

impl<M: Mailer> FaultInjectingMailer<M> {
    /// Create a mailer failing with probability `failure_rate`, seeded with `seed`.
    pub fn new(inner: M, failure_rate: f64, seed: u64) -> Result<Self> {
        Self::with_rng(inner, failure_rate, StdRng::seed_from_u64(seed))
    }

    /// Same as [`new`](Self::new) but seeded from OS entropy.
    pub fn from_entropy(inner: M, failure_rate: f64) -> Result<Self> {
        Self::with_rng(inner, failure_rate, StdRng::from_entropy())
    }

    fn with_rng(inner: M, failure_rate: f64, rng: StdRng) -> Result<Self> {
        if !(0.0..=1.0).contains(&failure_rate) {
            return Err(EngineError::InvalidArgument(format!(
                "failure rate must be within [0, 1], got {failure_rate}"
            )));
        }
        Ok(Self {
            inner,
            failure_rate,
            rng,
        })
    }

    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: Mailer> Mailer for FaultInjectingMailer<M> {
    fn send(&mut self, notification: &EmailNotification) -> Result<bool> {
        if self.rng.gen_bool(self.failure_rate) {
            return Ok(false);
        }
        self.inner.send(notification)
    }
}

// ---------------------------------------------------------------------------
// RecordingMailer
// ---------------------------------------------------------------------------

/// Keeps every accepted notification in memory, for previews and tests.
///
/// Contract ids registered with [`rejecting`](Self::rejecting) come back as
/// `Ok(false)`; those registered with [`erroring`](Self::erroring) as a
/// transport error.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    pub delivered: Vec<EmailNotification>,
    reject: HashSet<String>,
    error: HashSet<String>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(mut self, contract_id: impl Into<String>) -> Self {
        self.reject.insert(contract_id.into());
        self
    }

    pub fn erroring(mut self, contract_id: impl Into<String>) -> Self {
        self.error.insert(contract_id.into());
        self
    }
}

impl Mailer for RecordingMailer {
    fn send(&mut self, notification: &EmailNotification) -> Result<bool> {
        if self.error.contains(&notification.contract_id) {
            return Err(EngineError::Transport(format!(
                "connection reset while sending to {}",
                notification.to
            )));
        }
        if self.reject.contains(&notification.contract_id) {
            return Ok(false);
        }
        self.delivered.push(notification.clone());
        Ok(true)
    }
}
