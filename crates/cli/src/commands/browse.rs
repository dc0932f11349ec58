//! Browse command: the product grid.

use primecart_app::{
    context::AppContext,
    domain::{
        catalog::models::Product,
        query::{self, CatalogQuery},
    },
    format,
};
use tabled::{Table, Tabled, settings::Style};

use crate::commands::CommandError;

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Rating")]
    rating: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: format::truncate(&product.title, 40),
            price: format::format_price(product.price),
            category: format::capitalize(&product.category),
            rating: format!("{:.1} ({})", product.rating.rate, product.rating.count),
        }
    }
}

pub(crate) async fn run(ctx: &AppContext, query: CatalogQuery) -> Result<(), CommandError> {
    let Some(loaded) = ctx.loader.load().await else {
        // Superseded mid-flight; a newer load owns the screen.
        return Ok(());
    };
    let loaded = loaded?;

    let view = query::run(&loaded.products, &query);

    if view.items.is_empty() {
        println!("No products found. Try adjusting your search or filter.");
        return Ok(());
    }

    let rows: Vec<ProductRow> = view.items.iter().map(|product| ProductRow::from(*product)).collect();

    println!("{}", Table::new(rows).with(Style::sharp()));
    println!(
        "Showing {} of {} products · page {} of {}",
        view.items.len(),
        view.total_items,
        view.page,
        view.total_pages,
    );

    Ok(())
}
