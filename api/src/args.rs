use catalog_core::domain::common::{CatalogConfig, DatabaseConfig, StorageBackend};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-api", version, about = "Product catalog HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[arg(
        long = "storage",
        env = "STORAGE_BACKEND",
        value_enum,
        default_value_t = StorageArg::Postgres
    )]
    pub storage: StorageArg,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(id = "server_host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server_port", long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(id = "database_host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database_port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "catalog")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageArg {
    Postgres,
    Memory,
}

impl From<StorageArg> for StorageBackend {
    fn from(value: StorageArg) -> Self {
        match value {
            StorageArg::Postgres => StorageBackend::Postgres,
            StorageArg::Memory => StorageBackend::Memory,
        }
    }
}

impl From<Args> for CatalogConfig {
    fn from(args: Args) -> Self {
        CatalogConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            storage: args.storage.into(),
        }
    }
}
