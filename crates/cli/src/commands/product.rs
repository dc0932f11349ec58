//! Product command: one product's details plus related products.

use primecart_app::{
    context::AppContext,
    domain::catalog::models::{Product, ProductId},
    format,
};
use tracing::debug;

use crate::commands::CommandError;

/// How many related products to show beneath the details.
const RELATED_LIMIT: usize = 4;

pub(crate) async fn run(ctx: &AppContext, id: ProductId) -> Result<(), CommandError> {
    let product = ctx.catalog.get_product(id).await?;

    println!("{}", product.title);
    println!("{}", format::format_price(product.price));
    println!(
        "{} · {:.1} ({} reviews)",
        format::capitalize(&product.category),
        product.rating.rate,
        product.rating.count,
    );
    println!();
    println!("{}", format::truncate(&product.description, 200));
    println!();
    println!("Image: {}", product.image);

    // Related products are non-critical: any failure just omits the section.
    match ctx.catalog.list_products().await {
        Ok(all) => {
            let related: Vec<&Product> = all
                .iter()
                .filter(|candidate| {
                    candidate.category == product.category && candidate.id != product.id
                })
                .take(RELATED_LIMIT)
                .collect();

            if !related.is_empty() {
                println!();
                println!("Related products");
                for item in related {
                    println!(
                        "  {:>4}  {}  {}",
                        item.id,
                        format::format_price(item.price),
                        format::truncate(&item.title, 40),
                    );
                }
            }
        }
        Err(err) => debug!("related products unavailable: {err}"),
    }

    Ok(())
}
