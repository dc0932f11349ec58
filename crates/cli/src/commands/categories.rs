//! Categories command.

use primecart_app::{context::AppContext, format};

use crate::commands::CommandError;

pub(crate) async fn run(ctx: &AppContext) -> Result<(), CommandError> {
    let categories = ctx.catalog.list_categories().await?;

    for category in categories {
        println!("{}", format::capitalize(&category));
    }

    Ok(())
}
