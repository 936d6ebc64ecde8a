use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;

use geoaddr_application::prelude as flows;
use geoaddr_core::{
    entities::{Address, AddressFields, Delivery, Distance, UserId},
    gateways::geocode::GeoCodingGateway as _,
    repositories::{AddressField, FieldFilter, Pagination, SearchCriteria, SortDirection},
    usecases::NewAddress,
};
use geoaddr_db_sqlite::Connections;

use crate::{config::Config, gateways};

#[derive(Parser)]
#[command(name = "geoaddr", version, about = "Address management service")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    cfg_file: Option<PathBuf>,

    /// Overrides the database URL from the configuration
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Geocode and store a new establishment address
    CreateEstablishment(AddressArgs),
    /// Look up an establishment address by id
    GetEstablishment { id: String },
    /// Remove an establishment address
    DeleteEstablishment { id: String },
    /// Search establishment addresses
    SearchEstablishments(SearchArgs),
    /// Count all establishment addresses
    CountEstablishments,
    /// Geocode and store a new delivery address for a user
    CreateDelivery {
        #[arg(long)]
        user: u64,
        #[command(flatten)]
        address: AddressArgs,
    },
    /// List all delivery addresses of a user
    ListDeliveries {
        #[arg(long)]
        user: u64,
    },
    /// Look up a delivery address of a user
    GetDelivery {
        #[arg(long)]
        user: u64,
        id: String,
    },
    /// Mark a delivery address of a user as deleted
    DeleteDelivery {
        #[arg(long)]
        user: u64,
        id: String,
    },
    /// Find the establishment closest to a delivery address
    NearestEstablishment {
        #[arg(long)]
        user: u64,
        delivery_id: String,
        /// Maximum distance in meters, defaults to the configured value
        #[arg(long)]
        max_distance: Option<f64>,
    },
    /// Resolve an address with the configured geocoding gateway
    Geocode(AddressArgs),
}

#[derive(Args)]
struct AddressArgs {
    #[arg(long)]
    street: Option<String>,
    #[arg(long)]
    suburb: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    postal_code: Option<String>,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    country: Option<String>,
}

impl From<AddressArgs> for NewAddress {
    fn from(from: AddressArgs) -> Self {
        let AddressArgs {
            street,
            suburb,
            city,
            postal_code,
            state,
            country,
        } = from;
        Self {
            street,
            suburb,
            city,
            postal_code,
            state,
            country,
        }
    }
}

#[derive(Args)]
struct SearchArgs {
    /// Equality filter, e.g. `--filter city=Springfield`
    #[arg(long, value_name = "FIELD=VALUE")]
    filter: Vec<String>,
    /// Sort key, e.g. `--order-by street:desc`
    #[arg(long, value_name = "FIELD[:asc|:desc]")]
    order_by: Vec<String>,
    #[arg(long)]
    offset: Option<u64>,
    #[arg(long)]
    limit: Option<u64>,
}

fn parse_field(name: &str) -> Result<AddressField> {
    Ok(match name {
        "street" => AddressField::Street,
        "suburb" => AddressField::Suburb,
        "city" => AddressField::City,
        "postal-code" => AddressField::PostalCode,
        "state" => AddressField::State,
        "country" => AddressField::Country,
        _ => return Err(anyhow!("Unknown address field '{name}'")),
    })
}

fn search_criteria(args: SearchArgs) -> Result<SearchCriteria> {
    let SearchArgs {
        filter,
        order_by,
        offset,
        limit,
    } = args;
    let filter = filter
        .iter()
        .map(|f| {
            let (field, value) = f
                .split_once('=')
                .ok_or_else(|| anyhow!("Invalid filter '{f}'"))?;
            Ok(FieldFilter {
                field: parse_field(field)?,
                value: value.to_owned(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let order_by = order_by
        .iter()
        .map(|o| {
            let (field, direction) = match o.split_once(':') {
                Some((field, "asc")) => (field, SortDirection::Ascending),
                Some((field, "desc")) => (field, SortDirection::Descending),
                Some((_, other)) => return Err(anyhow!("Invalid sort direction '{other}'")),
                None => (o.as_str(), SortDirection::Ascending),
            };
            Ok((parse_field(field)?, direction))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(SearchCriteria {
        filter,
        order_by,
        pagination: Pagination { offset, limit },
    })
}

fn print_address(address: &Address) {
    let pos = address
        .pos
        .map(|pos| pos.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("{}\t{}\t{}", address.id, address.fields, pos);
}

fn print_delivery(delivery: &Delivery) {
    let pos = delivery
        .address
        .pos
        .map(|pos| pos.to_string())
        .unwrap_or_else(|| "-".to_string());
    let flag = if delivery.deleted { "\t(deleted)" } else { "" };
    println!(
        "{}\t{}\t{pos}{flag}",
        delivery.address.id, delivery.address.fields
    );
}

pub fn run() -> Result<()> {
    dotenv().ok();
    env_logger::init();
    let cli = Cli::parse();

    let mut cfg = Config::try_load_from_file_or_default(cli.cfg_file.as_deref())?;
    if let Some(db_url) = cli.db_url {
        cfg.db.conn_sqlite = db_url;
    }

    info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite, cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    geoaddr_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let geo_gw = gateways::geocoding_gateway(&cfg.geocoding);

    match cli.command {
        Command::CreateEstablishment(address) => {
            let address = flows::create_establishment(&connections, &geo_gw, address.into())?;
            print_address(&address);
        }
        Command::GetEstablishment { id } => {
            print_address(&flows::get_establishment(&connections, &id)?);
        }
        Command::DeleteEstablishment { id } => {
            let count = flows::delete_establishment(&connections, &id)?;
            println!("Deleted {count} record(s)");
        }
        Command::SearchEstablishments(args) => {
            let criteria = search_criteria(args)?;
            for address in flows::search_establishments(&connections, &criteria)? {
                print_address(&address);
            }
        }
        Command::CountEstablishments => {
            println!("{}", flows::count_establishments(&connections)?);
        }
        Command::CreateDelivery { user, address } => {
            let delivery =
                flows::create_delivery(&connections, &geo_gw, UserId::new(user), address.into())?;
            print_delivery(&delivery);
        }
        Command::ListDeliveries { user } => {
            for delivery in flows::deliveries_of_user(&connections, UserId::new(user))? {
                print_delivery(&delivery);
            }
        }
        Command::GetDelivery { user, id } => {
            print_delivery(&flows::get_delivery(&connections, UserId::new(user), &id)?);
        }
        Command::DeleteDelivery { user, id } => {
            let count = flows::delete_delivery(&connections, UserId::new(user), &id)?;
            println!("Marked {count} record(s) as deleted");
        }
        Command::NearestEstablishment {
            user,
            delivery_id,
            max_distance,
        } => {
            let max_distance = max_distance
                .map(Distance::from_meters)
                .unwrap_or(cfg.search.max_distance);
            let address = flows::nearest_establishment(
                &connections,
                UserId::new(user),
                &delivery_id,
                max_distance,
            )?;
            print_address(&address);
        }
        Command::Geocode(address) => {
            let fields = AddressFields::from(NewAddress::from(address));
            match geo_gw.resolve_address_lat_lng(&fields) {
                Some((lat, lng)) => println!("{lat},{lng}"),
                None => println!("Unable to resolve '{fields}'"),
            }
        }
    }
    Ok(())
}
