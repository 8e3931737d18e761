//! `till checkout`

use std::{io::Write, path::PathBuf, sync::Arc};

use clap::Args;
use till::ids::CustomerId;
use till_app::{
    checkout::{CheckoutSession, ProceedOutcome},
    customers::HttpPaymentInfoService,
};

use crate::{commands::load_cart, config::api::ApiConfig, errors::CliError};

/// Arguments of `till checkout`.
#[derive(Debug, Args)]
pub struct CheckoutArgs {
    /// Cart file (YAML or JSON)
    #[arg(long)]
    pub cart: PathBuf,

    /// Selected customer; defaults to the customer stored with the cart
    #[arg(long)]
    pub customer: Option<String>,
}

pub(crate) async fn run(
    args: &CheckoutArgs,
    api: &ApiConfig,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let fixture = load_cart(&args.cart)?;
    let cart = fixture.cart()?;

    let customer = args.customer.clone().map(CustomerId::from);
    let customer = customer.as_ref().or(fixture.customer());

    let payment_info = HttpPaymentInfoService::new(&api.payment_info()?)?;
    let session = CheckoutSession::new(Arc::new(payment_info));

    match session.proceed_to_payment(cart.items(), customer).await? {
        ProceedOutcome::Navigate(route) => writeln!(out, "{route}")?,
        ProceedOutcome::Discarded => writeln!(out, "Payment request discarded")?,
    }

    Ok(())
}
