//! `till render`

use std::{io::Write, path::PathBuf};

use clap::Args;
use till::{
    display::{render_cart, rendered_subtotal, table::write_cart},
    ids::ItemId,
};

use crate::{commands::load_cart, errors::CliError};

/// Arguments of `till render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Cart file (YAML or JSON)
    #[arg(long)]
    pub cart: PathBuf,

    /// Class catalog file mapping class ids to names
    #[arg(long)]
    pub classes: Option<PathBuf>,

    /// Id of the selected line; defaults to the selection stored with the cart
    #[arg(long)]
    pub selected: Option<String>,
}

pub(crate) fn run(args: &RenderArgs, out: &mut impl Write) -> Result<(), CliError> {
    let mut fixture = load_cart(&args.cart)?;

    if let Some(classes) = &args.classes {
        fixture.load_classes_file(classes)?;
    }

    let currency = fixture.currency()?;
    let selected = args.selected.clone().map(ItemId::from);
    let selected = selected.as_ref().or(fixture.selected());

    let lines = render_cart(fixture.raw_items(), fixture.classes(), selected, currency);
    let subtotal = rendered_subtotal(&lines, currency)?;

    write_cart(out, &lines, Some(subtotal))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use till::fixtures::FixtureError;

    use crate::commands::test_helpers::fixture;

    use super::*;

    fn render(args: &RenderArgs) -> TestResult<String> {
        let mut out = Vec::new();

        run(args, &mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn renders_mixed_cart_with_classes() -> TestResult {
        let output = render(&RenderArgs {
            cart: fixture("carts/mixed.yml"),
            classes: Some(fixture("classes/studio.yml")),
            selected: None,
        })?;

        assert!(output.contains("Classcard"), "{output}");
        assert!(output.contains("Checkin to"), "{output}");
        assert!(output.contains("Subtotal"), "{output}");

        Ok(())
    }

    #[test]
    fn broken_cart_still_renders() -> TestResult {
        let output = render(&RenderArgs {
            cart: fixture("carts/broken.yml"),
            classes: None,
            selected: Some("2".to_string()),
        })?;

        assert!(output.contains("Unavailable item (2)"), "{output}");
        assert!(output.contains("Unavailable item (3)"), "{output}");
        assert!(output.contains(">#2"), "{output}");

        Ok(())
    }

    #[test]
    fn missing_cart_file_fails() {
        let result = run(
            &RenderArgs {
                cart: fixture("carts/does-not-exist.yml"),
                classes: None,
                selected: None,
            },
            &mut Vec::new(),
        );

        assert!(
            matches!(result, Err(CliError::Fixture(FixtureError::Io(_)))),
            "{result:?}"
        );
    }
}
