use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check
    /// the documentation or `.env.example` file for required configuration
    /// variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },

    /// A ticket system type has no registered `TicketSystemInfo`.
    ///
    /// The registry covers the closed set of system types and is validated at
    /// startup, so hitting this at request time is a programmer error.
    #[error("No ticket system registered for type: {0}")]
    UnregisteredTicketSystem(String),

    /// A component custom id or command argument referenced a ticket system
    /// type that does not exist.
    #[error("Unknown ticket system type: {0}")]
    UnknownTicketSystem(String),
}
