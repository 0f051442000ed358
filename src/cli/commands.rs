//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::PricingService;
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::domain::{SaleInput, SaleResult};
use crate::infrastructure::ServiceContainer;

pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    if let Some(shell) = cli.generate {
        return cmd_generate(shell);
    }

    let input = sale_input(cli)?;
    let line = cmd_quote(&container.pricing, &input);
    output::info(&line);
    Ok(())
}

/// Collect the pricing options into a [`SaleInput`].
pub fn sale_input(cli: &Cli) -> CliResult<SaleInput> {
    let quantity = cli
        .quantity
        .ok_or_else(|| CliError::Usage("missing required option --quantity".into()))?;
    let unit_price = cli
        .price
        .ok_or_else(|| CliError::Usage("missing required option --price".into()))?;
    let state = cli
        .state
        .as_deref()
        .ok_or_else(|| CliError::Usage("missing required option --state".into()))?;

    Ok(SaleInput::new(quantity, unit_price, state))
}

/// Price one sale and render the result line.
#[instrument(skip(pricing))]
pub fn cmd_quote(pricing: &PricingService, input: &SaleInput) -> String {
    let result = pricing.quote(input);
    debug!("cmd_quote: {:?}", result);
    format_sale_line(input, &result)
}

/// Render the one-line summary printed on stdout.
pub fn format_sale_line(input: &SaleInput, result: &SaleResult) -> String {
    format!(
        "Prix total: {:.2} € pour {} articles à {:.2} € l'unité dans l'état {} avec une remise de {:.2} € et une taxe de {}%",
        result.final_total,
        input.quantity,
        input.unit_price,
        input.state_code.to_uppercase(),
        result.discount_amount,
        result.tax_percent(),
    )
}

fn cmd_generate(shell: Shell) -> CliResult<()> {
    output::status(&format!("Generating completion file for {shell}..."));
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
