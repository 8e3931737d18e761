//! `till eligibility`

use std::{io::Write, path::PathBuf};

use clap::Args;
use till::{
    checkout::{needs_payment_info_lookup, payment_eligibility},
    ids::CustomerId,
};

use crate::{commands::load_cart, errors::CliError};

/// Arguments of `till eligibility`.
#[derive(Debug, Args)]
pub struct EligibilityArgs {
    /// Cart file (YAML or JSON)
    #[arg(long)]
    pub cart: PathBuf,

    /// Selected customer; defaults to the customer stored with the cart
    #[arg(long)]
    pub customer: Option<String>,
}

pub(crate) fn run(args: &EligibilityArgs, out: &mut impl Write) -> Result<(), CliError> {
    let fixture = load_cart(&args.cart)?;
    let cart = fixture.cart()?;

    let customer = args.customer.clone().map(CustomerId::from);
    let customer = customer.as_ref().or(fixture.customer());

    match payment_eligibility(cart.items(), customer) {
        Ok(()) => {
            writeln!(out, "Payment allowed")?;

            if let Some(customer) = needs_payment_info_lookup(cart.items(), customer) {
                writeln!(out, "Payment info lookup required for customer {customer}")?;
            }
        }
        Err(blocked) => writeln!(out, "Payment blocked: {blocked}")?,
    }

    Ok(())
}
