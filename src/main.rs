use anyhow::Result;
use avian_listings::cli::{Cli, Command};
use avian_listings::dashboard::AgentDashboard;
use avian_listings::forms::{ContactField, ContactForm};
use avian_listings::models::PropertyRecord;
use avian_listings::payment::{FeeBreakdown, MobilizationCheckout};
use avian_listings::query::{self, PageRequest, PaginationControls};
use avian_listings::sources::{self, MockCatalog};
use avian_listings::Config;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();
    let config = Config::from_env()?;
    let catalog = MockCatalog::try_new()?.with_delay(config.simulated_delay);

    match &cli.command {
        Command::Listings { sort, page, .. } => {
            let source = sources::listing_source(&config, &catalog)?;
            info!("Loading listings from {}", source.source_name());

            let all = source.fetch_listings().await?;
            let visible = query::visible_listings(&all);
            let filter = cli.command.filter().unwrap_or_default();
            let result = query::query_listings(&visible, &filter, *sort, PageRequest::new(*page));

            if cli.json {
                return print_json(&result);
            }
            if result.is_empty() {
                println!("No Properties Found");
                println!("Try adjusting your filters to find what you're looking for.");
                return Ok(());
            }
            println!("{}\n", result.summary());
            for property in &result.records {
                print_card(property);
            }
            let controls = PaginationControls::new(result.page, result.total_pages);
            if !controls.is_hidden() {
                let labels: Vec<String> = controls.items.iter().map(ToString::to_string).collect();
                println!("Pages: {}", labels.join(" "));
            }
        }

        Command::Show { id } => {
            let Some(property) = catalog.property(id) else {
                warn!("Unknown property {}", id);
                anyhow::bail!("Property not found: {}", id);
            };
            if cli.json {
                return print_json(property);
            }
            print_card(property);
            println!("   {}", property.description);
            println!("   Built {}, lot {} sqft", property.year_built, property.lot_area);
            if let Some(agent) = catalog.agent_for(property) {
                println!("   Agent: {} <{}>", agent.name, agent.email);
            }
        }

        Command::Featured => {
            if cli.json {
                return print_json(catalog.featured());
            }
            for property in catalog.featured() {
                print_card(property);
            }
        }

        Command::Agent { id } => {
            let dashboard =
                AgentDashboard::build(id, catalog.properties(), catalog.client_requests());
            if cli.json {
                return print_json(&dashboard);
            }
            let stats = &dashboard.stats;
            println!("Active listings: {}", stats.active_listings);
            println!("Properties sold: {}", stats.properties_sold);
            println!("Total revenue:   ₦{}", stats.total_revenue);
            println!("New leads:       {}\n", stats.new_leads);
            for property in &dashboard.listings {
                println!("{}  {}  {}", property.id, property.status, property.address.street);
            }
        }

        Command::Admin { status } => {
            let admin = catalog.admin_dashboard();
            let rows = admin.properties(*status);
            if cli.json {
                return print_json(&rows);
            }
            for property in rows {
                let agent = admin
                    .agent_for(property)
                    .map(|u| u.name.as_str())
                    .unwrap_or("-");
                println!(
                    "{}  {:<15} {:<28} {:<16} {}",
                    property.id,
                    property.status,
                    property.address.street,
                    agent,
                    property.date_added.format("%Y-%m-%d")
                );
            }
        }

        Command::Fee => {
            let fees = FeeBreakdown::standard();
            if cli.json {
                return print_json(&fees);
            }
            println!("Mobilization Fee  ₦{}", fees.mobilization_fee);
            println!("Processing Fee    ₦{}", fees.processing_fee);
            println!("VAT (7.5%)        ₦{}", fees.vat);
            println!("Total Amount      ₦{}", fees.total);
        }

        Command::Pay {
            method,
            transaction,
        } => {
            let sink = sources::lead_sink(&config)?;
            info!("Recording payment through {}", sink.sink_name());

            let mut checkout = MobilizationCheckout::default();
            checkout.select_method(*method);
            let payment = checkout.pay(sink.as_ref(), transaction).await?;
            if cli.json {
                return print_json(payment);
            }
            println!("Payment Successful");
            println!("Reference:   {}", payment.id);
            println!("Transaction: {}", payment.transaction_id);
            println!("Amount:      ₦{}", payment.amount);
        }

        Command::Contact {
            name,
            email,
            phone,
            subject,
            message,
        } => {
            let mut form = ContactForm::new();
            form.set(ContactField::Name, name.as_str());
            form.set(ContactField::Email, email.as_str());
            form.set(ContactField::Phone, phone.as_str());
            form.set(ContactField::Subject, subject.as_str());
            form.set(ContactField::Message, message.as_str());

            let enquiry = match form.submit() {
                Ok(enquiry) => enquiry,
                Err(errors) => {
                    for (field, problem) in errors.iter() {
                        println!("{}: {}", field, problem);
                    }
                    return Err(errors.into());
                }
            };
            let sink = sources::lead_sink(&config)?;
            let receipt = sink.submit_contact_message(&enquiry).await?;
            if cli.json {
                return print_json(&receipt);
            }
            println!("Thank You! Your message has been sent successfully.");
            println!("Reference: {}", receipt.reference);
        }
    }

    Ok(())
}

fn print_card(property: &PropertyRecord) {
    println!("{} ({})", property.address.street, property.display_price());
    println!("   {}, {}", property.address.city, property.address.state);
    println!(
        "   {} beds, {} baths, {} sqft",
        property.bedrooms, property.bathrooms, property.living_area
    );
    println!("   {} · {}", property.property_type, property.status);
    println!("   ID: {}", property.id);
    println!();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
