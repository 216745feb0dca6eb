//! CLI argument definitions using clap
//!
//! Commands:
//! - avian-listings listings [--location <text>] [--min-price <n>] [--max-price <n>]
//!   [--type <kind>] [--sort <order>] [--page <n>]
//! - avian-listings show <id>
//! - avian-listings featured
//! - avian-listings agent <id>
//! - avian-listings admin [--status <status>]
//! - avian-listings fee
//! - avian-listings pay --method <card|transfer> --transaction <id>
//! - avian-listings contact --name <name> --email <email> --subject <text> --message <text>

use crate::dashboard::StatusFilter;
use crate::payment::PaymentMethod;
use crate::query::{FilterSpec, SortOption, TypeFilter};
use clap::{Parser, Subcommand};

/// Avian Real Estate listings and lead desk
#[derive(Parser, Debug)]
#[command(name = "avian-listings")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the public listings
    Listings {
        /// Match against city, state or street
        #[arg(long, default_value = "")]
        location: String,

        #[arg(long)]
        min_price: Option<i64>,

        #[arg(long)]
        max_price: Option<i64>,

        /// `all` or one of villa, apartment, penthouse, mansion
        #[arg(long = "type", default_value = "all", value_parser = parse_type_filter)]
        property_type: TypeFilter,

        /// newest, price_asc or price_desc
        #[arg(long, default_value = "newest", value_parser = parse_sort)]
        sort: SortOption,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Show one property and its agent
    Show {
        id: String,
    },

    /// Home page highlights
    Featured,

    /// Agent dashboard
    Agent {
        id: String,
    },

    /// Admin property table
    Admin {
        #[arg(long, default_value = "all", value_parser = parse_status_filter)]
        status: StatusFilter,
    },

    /// Mobilization fee breakdown
    Fee,

    /// Pay the mobilization fee for a transaction
    Pay {
        /// card or transfer
        #[arg(long, value_parser = parse_method)]
        method: PaymentMethod,

        #[arg(long)]
        transaction: String,
    },

    /// Send an enquiry from the contact page
    Contact {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long, default_value = "")]
        message: String,
    },
}

impl Command {
    /// Filter carried by a `listings` command
    pub fn filter(&self) -> Option<FilterSpec> {
        match self {
            Command::Listings {
                location,
                min_price,
                max_price,
                property_type,
                ..
            } => Some(FilterSpec {
                location: location.clone(),
                min_price: *min_price,
                max_price: *max_price,
                property_type: *property_type,
            }),
            _ => None,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

fn parse_type_filter(value: &str) -> Result<TypeFilter, String> {
    TypeFilter::parse(value).ok_or_else(|| format!("unknown property type: {}", value))
}

fn parse_sort(value: &str) -> Result<SortOption, String> {
    SortOption::parse(value).ok_or_else(|| format!("unknown sort order: {}", value))
}

fn parse_method(value: &str) -> Result<PaymentMethod, String> {
    PaymentMethod::parse(value).ok_or_else(|| format!("unknown payment method: {}", value))
}

fn parse_status_filter(value: &str) -> Result<StatusFilter, String> {
    StatusFilter::parse(value).ok_or_else(|| format!("unknown status: {}", value))
}
