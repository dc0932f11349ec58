//! Cart commands.

use primecart_app::{context::AppContext, format};
use tabled::{Table, Tabled, settings::Style};

use crate::{commands::CommandError, config::CartCommand};

#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Line total")]
    line_total: String,
}

pub(crate) async fn run(ctx: &mut AppContext, command: CartCommand) -> Result<(), CommandError> {
    match command {
        CartCommand::Add { id, quantity } => {
            let product = ctx.catalog.get_product(id).await?;
            ctx.cart.add_item(&product, quantity);
        }
        CartCommand::Remove { id } => ctx.cart.remove_item(id),
        CartCommand::Update { id, quantity } => ctx.cart.update_quantity(id, quantity),
        CartCommand::Clear => ctx.cart.clear(),
        CartCommand::Show => show(ctx),
    }

    Ok(())
}

fn show(ctx: &AppContext) {
    if ctx.cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    let rows: Vec<LineRow> = ctx
        .cart
        .lines()
        .iter()
        .map(|line| LineRow {
            id: line.product.id,
            title: format::truncate(&line.product.title, 40),
            quantity: line.quantity,
            unit: format::format_price(line.product.price),
            line_total: format::format_price(line.line_total()),
        })
        .collect();

    println!("{}", Table::new(rows).with(Style::sharp()));
    println!("Subtotal  {}", format::format_price(ctx.cart.subtotal()));
    println!("Tax       {}", format::format_price(ctx.cart.tax()));
    println!("Total     {}", format::format_price(ctx.cart.total()));
}
