use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// The listening port was not passed on the command line.
    ///
    /// The port is the sole positional argument, e.g. `motbot 8080`.
    #[error("Missing required port argument, usage: motbot <port>")]
    MissingPortArgument,

    /// The port argument is not a valid TCP port number.
    #[error("Invalid port argument '{value}': {source}")]
    InvalidPort {
        /// The argument that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
