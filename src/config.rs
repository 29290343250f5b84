use anyhow::{Context, Result};
use clap::Parser;
use std::{env, fmt};

const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIRECTUS_HOST: &str = "https://content.carterjs.com";
const DEFAULT_FOLDER_ID: &str = "360ad7fe-dbe0-4ffc-af2b-9347027dc0a8";

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_host: String,
    pub port: u16,
    pub remote: RemoteConfig,
}

/// Where the photo catalog lives and how to authenticate against it.
#[derive(Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Base URL of the Directus instance, without a trailing slash.
    pub host: String,

    /// Folder whose files make up the gallery.
    pub folder_id: String,

    /// Static access token. `None` means unauthenticated requests.
    pub token: Option<String>,
}

impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("host", &self.host)
            .field("folder_id", &self.folder_id)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Command-line + environment configuration.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Photo gallery backed by a Directus folder")]
pub struct Args {
    /// Host to bind to (overrides GALLERY_BIND_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Directus base URL (overrides DIRECTUS_HOST)
    #[arg(long)]
    pub directus_host: Option<String>,

    /// Directus folder holding the gallery photos (overrides DIRECTUS_FOLDER_ID)
    #[arg(long)]
    pub folder_id: Option<String>,

    /// Directus access token (overrides DIRECTUS_TOKEN)
    #[arg(long)]
    pub token: Option<String>,
}

impl AppConfig {
    /// Parse CLI args and the process environment into an AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        let args = Args::parse();
        Self::resolve(args, read_env)
    }

    /// Merge parsed args over values obtained from `lookup`, falling back to defaults.
    ///
    /// A variable that is present but empty still overrides its default.
    /// Errors from `lookup` are returned as-is.
    pub fn resolve<F>(args: Args, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        let env_host = lookup("GALLERY_BIND_HOST")?.unwrap_or_else(|| DEFAULT_BIND_HOST.into());
        let env_port = match lookup("PORT")? {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing PORT value `{}`", value))?,
            None => DEFAULT_PORT,
        };
        let env_directus =
            lookup("DIRECTUS_HOST")?.unwrap_or_else(|| DEFAULT_DIRECTUS_HOST.into());
        let env_folder =
            lookup("DIRECTUS_FOLDER_ID")?.unwrap_or_else(|| DEFAULT_FOLDER_ID.into());
        let env_token = lookup("DIRECTUS_TOKEN")?;

        let host = args.directus_host.unwrap_or(env_directus);
        let token = args.token.or(env_token).filter(|t| !t.is_empty());

        Ok(Self {
            bind_host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            remote: RemoteConfig {
                host: host.trim_end_matches('/').to_string(),
                folder_id: args.folder_id.unwrap_or(env_folder),
                token,
            },
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

/// Read one variable from the process environment.
///
/// Unset is `None`; a value that is not valid unicode is an error.
fn read_env(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("reading {}", key)),
    }
}
