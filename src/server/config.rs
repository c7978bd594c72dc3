use crate::server::error::{config::ConfigError, AppError};

pub const CLOUDINARY_API_URL: &str = "https://api.cloudinary.com/v1_1";
pub const DEFAULT_PORT: u16 = 4000;

pub struct Config {
    pub database_url: String,
    pub port: u16,

    pub jwt_secret: String,

    pub cloudinary_name: String,
    pub cloudinary_key: String,
    pub cloudinary_secret: String,
    pub cloudinary_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and `PORT` valid if set
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidEnvVar)` - `PORT` is not a valid port number
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port,
            jwt_secret: required("JWT_SECRET")?,
            cloudinary_name: required("CLOUDINARY_NAME")?,
            cloudinary_key: required("CLOUDINARY_KEY")?,
            cloudinary_secret: required("CLOUDINARY_SECRET")?,
            cloudinary_api_url: CLOUDINARY_API_URL.to_string(),
        })
    }
}
