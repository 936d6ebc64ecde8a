use std::{env, fs, io::ErrorKind, path::Path};

use anyhow::{anyhow, Result};

use geoaddr_core::entities::Distance;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geoaddr.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub geocoding: Geocoding,
    pub search: Search,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

pub enum GeocodingGateway {
    OpenCage { api_key: String },
}

pub struct Search {
    /// Upper bound for nearest-establishment queries.
    pub max_distance: Distance,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            geocoding,
            search,
            gateway,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let geo_gateway = match geocoding.and_then(|g| g.gateway) {
            Some(raw::GeocodingGateway::Opencage) => {
                let raw::OpenCage { api_key } = gateway
                    .and_then(|g| g.opencage)
                    .ok_or_else(|| anyhow!("Missing 'opencage' gateway configuration"))?;
                Some(GeocodingGateway::OpenCage { api_key })
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        let raw::Search {
            max_distance_meters,
        } = search.unwrap_or_default();
        if !max_distance_meters.is_finite() || max_distance_meters <= 0.0 {
            return Err(anyhow!(
                "Invalid max. search distance: {max_distance_meters}"
            ));
        }
        let search = Search {
            max_distance: Distance::from_meters(max_distance_meters),
        };

        Ok(Self {
            db,
            geocoding,
            search,
        })
    }
}
