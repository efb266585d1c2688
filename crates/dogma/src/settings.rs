use crate::dto::{CodonContent, StrandContent, TranslateContent};
use crate::error::AppError;
use crate::router::{JSON_CONTENT_TYPE, Method, Request, Route};
use clap::{Parser, Subcommand};
use dogma_core::naming::NamingType;
use dogma_core::strand::StrandEnd;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Transcribe a DNA strand into its complementary RNA.
    Transcribe {
        /// DNA bases (A, T, G, C). Case-insensitive.
        sequence: String,

        /// End the DNA is read from.
        #[arg(long = "read-from", default_value = StrandEnd::THREE_PRIME)]
        read_from: String,

        /// End the DNA is read to.
        #[arg(long, default_value = StrandEnd::FIVE_PRIME)]
        to: String,
    },

    /// Convert an RNA strand into its complementary DNA.
    RnaToDna {
        /// RNA bases (A, U, G, C). Case-insensitive.
        sequence: String,

        #[arg(long = "read-from", default_value = StrandEnd::FIVE_PRIME)]
        read_from: String,

        #[arg(long, default_value = StrandEnd::THREE_PRIME)]
        to: String,
    },

    /// Translate an RNA strand into amino acids, from the first AUG to the first stop codon.
    Translate {
        /// RNA bases (A, U, G, C). Case-insensitive.
        sequence: String,

        #[arg(long = "read-from", default_value = StrandEnd::FIVE_PRIME)]
        read_from: String,

        #[arg(long, default_value = StrandEnd::THREE_PRIME)]
        to: String,

        /// "short", "3 letters" or "long". Anything else means "3 letters".
        #[arg(long = "naming-type", default_value = NamingType::DEFAULT_LABEL)]
        naming_type: String,
    },

    /// Look up the amino acid of one codon and its synonymous codons.
    CodonToProtein {
        codon: String,

        /// "short", "3 letters" or "long". Anything else means "3 letters".
        #[arg(long = "naming-type", default_value = NamingType::DEFAULT_LABEL)]
        naming_type: String,
    },

    /// Send one raw request, e.g. `dogma request /api/translate --body '{...}'`.
    /// The body is read from stdin when neither --body nor --file is given.
    Request {
        path: String,

        #[arg(long, value_enum, default_value_t = Method::Post)]
        method: Method,

        #[arg(long, conflicts_with = "file")]
        body: Option<String>,

        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        #[arg(long = "content-type", default_value = JSON_CONTENT_TYPE)]
        content_type: String,
    },

    /// Answer newline-delimited JSON requests from stdin until it closes.
    /// Each line is {"id", "method", "path", "body"}.
    Serve,
}

impl Commands {
    /// The request this command sends. `None` for `serve`.
    pub fn into_request(self, stdin: impl Read) -> Result<Option<Request>, AppError> {
        let request = match self {
            Self::Transcribe {
                sequence,
                read_from,
                to,
            } => operation_request(
                Route::Transcribe,
                StrandContent {
                    sequence,
                    read_from,
                    to,
                },
            )?,
            Self::RnaToDna {
                sequence,
                read_from,
                to,
            } => operation_request(
                Route::RnaToDna,
                StrandContent {
                    sequence,
                    read_from,
                    to,
                },
            )?,
            Self::Translate {
                sequence,
                read_from,
                to,
                naming_type,
            } => operation_request(
                Route::Translate,
                TranslateContent {
                    sequence,
                    read_from,
                    to,
                    naming_type,
                },
            )?,
            Self::CodonToProtein { codon, naming_type } => operation_request(
                Route::CodonToProtein,
                CodonContent { codon, naming_type },
            )?,
            Self::Request {
                path,
                method,
                body,
                file,
                content_type,
            } => {
                let body = match (body, file) {
                    (Some(body), _) => body,
                    (None, Some(file)) => std::fs::read_to_string(file)?,
                    (None, None) => {
                        let mut body = String::new();
                        let mut stdin = stdin;
                        stdin.read_to_string(&mut body)?;
                        body
                    }
                };
                Request {
                    method,
                    path,
                    content_type: Some(content_type),
                    body,
                }
            }
            Self::Serve => return Ok(None),
        };

        Ok(Some(request))
    }
}

fn operation_request<C: Serialize>(route: Route, content: C) -> Result<Request, AppError> {
    let body = serde_json::to_string(&route.envelope(content))?;
    Ok(Request::json(route.method(), route.to_string(), body))
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pretty-print JSON responses.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log at debug level. RUST_LOG overrides this.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Compact,
    Pretty,
}

impl OutputFormat {
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String, serde_json::Error> {
        match self {
            Self::Compact => serde_json::to_string(value),
            Self::Pretty => serde_json::to_string_pretty(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output: OutputFormat,

    /// Default `tracing` filter directive.
    pub log_filter: String,
}

impl TryFrom<&Cli> for Settings {
    type Error = AppError;

    fn try_from(cli: &Cli) -> Result<Self, AppError> {
        // serve answers one request per line
        if cli.pretty && cli.command == Commands::Serve {
            return Err(AppError::CliError(
                "--pretty cannot be used with serve: responses are written one per line"
                    .to_string(),
            ));
        }

        Ok(Self {
            output: if cli.pretty {
                OutputFormat::Pretty
            } else {
                OutputFormat::Compact
            },
            log_filter: if cli.debug { "debug" } else { "warn" }.to_string(),
        })
    }
}
