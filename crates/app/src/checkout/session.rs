//! Checkout session
//!
//! Guards the payment button: one payment request at a time, and a request
//! whose answer arrives after the cashier moved on is discarded.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use till::{checkout::PaymentRoute, ids::CustomerId, items::CartItem};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{
    checkout::{CheckoutError, resolve_payment_destination},
    customers::PaymentInfoService,
};

/// Result of pressing the payment button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProceedOutcome {
    /// Navigate to the route.
    Navigate(PaymentRoute),

    /// The request was cancelled before its answer was used.
    Discarded,
}

#[derive(Debug, Default)]
struct SessionState {
    generation: u64,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    generation: u64,
    cancel: CancellationToken,
}

/// Clears the pending request when its future completes or is dropped.
struct PendingGuard<'s> {
    state: &'s Mutex<SessionState>,
    generation: u64,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let mut state = lock(self.state);

        if state
            .pending
            .as_ref()
            .is_some_and(|pending| pending.generation == self.generation)
        {
            state.pending = None;
        }
    }
}

fn lock(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Payment flow of one till screen.
pub struct CheckoutSession {
    payment_info: Arc<dyn PaymentInfoService>,
    state: Mutex<SessionState>,
}

impl Debug for CheckoutSession {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CheckoutSession")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl CheckoutSession {
    /// Create a session backed by the given payment-info service.
    #[must_use]
    pub fn new(payment_info: Arc<dyn PaymentInfoService>) -> Self {
        Self {
            payment_info,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Handle a press of the payment button.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::Blocked`]: the cart may not proceed to payment.
    /// - [`CheckoutError::InFlight`]: an earlier request has not finished yet.
    /// - [`CheckoutError::LookupFailure`]: the payment-info lookup failed.
    pub async fn proceed_to_payment(
        &self,
        items: &[CartItem<'_>],
        customer: Option<&CustomerId>,
    ) -> Result<ProceedOutcome, CheckoutError> {
        till::checkout::payment_eligibility(items, customer)?;

        let (token, _guard) = self.begin()?;

        let route = tokio::select! {
            biased;

            () = token.cancelled() => {
                debug!("payment request cancelled while waiting");

                return Ok(ProceedOutcome::Discarded);
            }
            route = resolve_payment_destination(items, customer, self.payment_info.as_ref()) => route?,
        };

        if token.is_cancelled() {
            debug!(route = %route, "discarding payment route of a cancelled request");

            return Ok(ProceedOutcome::Discarded);
        }

        info!(route = %route, "proceeding to payment");

        Ok(ProceedOutcome::Navigate(route))
    }

    /// Cancel the pending request, if any. Its answer will be discarded.
    ///
    /// Returns whether a request was pending.
    pub fn cancel(&self) -> bool {
        let Some(pending) = lock(&self.state).pending.take() else {
            return false;
        };

        pending.cancel.cancel();

        true
    }

    /// Whether a payment request is waiting for its answer.
    pub fn is_in_flight(&self) -> bool {
        lock(&self.state).pending.is_some()
    }

    fn begin(&self) -> Result<(CancellationToken, PendingGuard<'_>), CheckoutError> {
        let mut state = lock(&self.state);

        if state.pending.is_some() {
            return Err(CheckoutError::InFlight);
        }

        state.generation = state.generation.wrapping_add(1);

        let generation = state.generation;
        let token = CancellationToken::new();

        state.pending = Some(Pending {
            generation,
            cancel: token.clone(),
        });

        Ok((
            token,
            PendingGuard {
                state: &self.state,
                generation,
            },
        ))
    }
}
