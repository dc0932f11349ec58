//! CLI configuration module

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use primecart_app::{
    domain::{
        catalog::models::ProductId,
        checkout::PaymentMethod,
        query::SortKey,
    },
    theme::Theme,
};

/// PrimeCart storefront CLI
#[derive(Debug, Parser)]
#[command(name = "primecart", about = "PrimeCart storefront", long_about = None)]
pub struct Cli {
    /// Catalog API base URL
    #[arg(
        long,
        env = "PRIMECART_API_URL",
        default_value = "https://fakestoreapi.com"
    )]
    pub api_url: String,

    /// Directory for persisted cart, wishlist and theme state
    #[arg(long, env = "PRIMECART_DATA_DIR", default_value = ".primecart")]
    pub data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Storefront command to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Storefront commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the product grid with search, filter, sort and paging
    Browse {
        /// Search text matched against title, description and category
        #[arg(long, default_value = "")]
        search: String,

        /// Only show products in this category
        #[arg(long)]
        category: Option<String>,

        /// Sort order: default, price-asc, price-desc, rating or name
        #[arg(long, default_value_t = SortKey::Default)]
        sort: SortKey,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Show one product and its related products
    Product {
        /// Product id
        id: ProductId,
    },

    /// List the catalog's categories
    Categories,

    /// Manage the cart
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },

    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        command: WishlistCommand,
    },

    /// Place a simulated order for the current cart
    Checkout(CheckoutArgs),

    /// Show or set the display theme
    Theme {
        /// New theme (light or dark); omit to show the current one
        theme: Option<Theme>,
    },
}

/// Cart subcommands.
#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Add a product to the cart
    Add {
        /// Product id
        id: ProductId,

        /// Number of units to add
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },

    /// Remove a product from the cart
    Remove {
        /// Product id
        id: ProductId,
    },

    /// Set the quantity for a product (zero or less removes it)
    Update {
        /// Product id
        id: ProductId,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i32,
    },

    /// Empty the cart
    Clear,

    /// Show the cart and its totals
    Show,
}

/// Wishlist subcommands.
#[derive(Debug, Subcommand)]
pub enum WishlistCommand {
    /// Add the product if absent, remove it if present
    Toggle {
        /// Product id
        id: ProductId,
    },

    /// Remove a product from the wishlist
    Remove {
        /// Product id
        id: ProductId,
    },

    /// Show the wishlist
    Show,
}

/// Checkout form fields.
#[derive(Debug, Args)]
pub struct CheckoutArgs {
    /// First name
    #[arg(long, default_value = "")]
    pub first_name: String,

    /// Last name
    #[arg(long, default_value = "")]
    pub last_name: String,

    /// Email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Shipping address
    #[arg(long, default_value = "")]
    pub address: String,

    /// City
    #[arg(long, default_value = "")]
    pub city: String,

    /// ZIP code
    #[arg(long, default_value = "")]
    pub zip: String,

    /// Payment method (card or cash)
    #[arg(long, default_value_t = PaymentMethod::Card)]
    pub payment: PaymentMethod,
}
