//! Wishlist commands.

use primecart_app::{context::AppContext, format};

use crate::{commands::CommandError, config::WishlistCommand};

pub(crate) async fn run(
    ctx: &mut AppContext,
    command: WishlistCommand,
) -> Result<(), CommandError> {
    match command {
        WishlistCommand::Toggle { id } => {
            if ctx.wishlist.contains(id) {
                ctx.wishlist.remove(id);
            } else {
                let product = ctx.catalog.get_product(id).await?;
                ctx.wishlist.toggle(&product);
            }
        }
        WishlistCommand::Remove { id } => ctx.wishlist.remove(id),
        WishlistCommand::Show => show(ctx),
    }

    Ok(())
}

fn show(ctx: &AppContext) {
    if ctx.wishlist.is_empty() {
        println!("Your wishlist is empty.");
        return;
    }

    for item in ctx.wishlist.items() {
        println!(
            "  {:>4}  {}  {}",
            item.id,
            format::format_price(item.price),
            format::truncate(&item.title, 40),
        );
    }
}
