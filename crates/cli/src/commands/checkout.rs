//! Checkout command: place a simulated order for the current cart.

use primecart_app::{
    context::AppContext,
    domain::checkout::{CheckoutError, CheckoutForm, CheckoutWorkflow},
    format,
};

use crate::{commands::CommandError, config::CheckoutArgs};

pub(crate) async fn run(ctx: &mut AppContext, args: CheckoutArgs) -> Result<(), CommandError> {
    let form = CheckoutForm {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        address: args.address,
        city: args.city,
        zip: args.zip,
        payment_method: args.payment,
    };

    let mut workflow = CheckoutWorkflow::new();

    match workflow.submit(&form, &ctx.cart) {
        Ok(()) => {}
        Err(CheckoutError::EmptyCart) => {
            // Not a validation failure: there is simply nothing to buy.
            println!("Nothing to checkout. Add items to your cart first.");
            return Ok(());
        }
        Err(err) => {
            if let CheckoutError::Invalid(ref errors) = err {
                for (field, message) in errors.iter() {
                    println!("{field}: {message}");
                }
            }
            return Err(err.into());
        }
    }

    println!(
        "Processing payment of {}…",
        format::format_price(ctx.cart.total())
    );

    workflow.process(&mut ctx.cart).await?;

    println!("Order placed! Thank you for your purchase.");

    Ok(())
}
