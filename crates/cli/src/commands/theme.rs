//! Theme command.

use primecart_app::{context::AppContext, theme::Theme};

pub(crate) fn run(ctx: &mut AppContext, theme: Option<Theme>) {
    match theme {
        Some(theme) => {
            ctx.theme.set(theme);
            println!("Theme set to {theme}");
        }
        None => println!("{}", ctx.theme.theme()),
    }
}
