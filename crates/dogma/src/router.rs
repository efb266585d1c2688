use crate::dto::{
    CodonToProteinRequest, RequestDto, RnaToDnaRequest, TranscribeRequest, TranslateRequest,
};
use crate::response::{
    BAD_REQUEST, METHOD_NOT_ALLOWED, NOT_FOUND, Response, UNSUPPORTED_MEDIA_TYPE,
};
use clap::ValueEnum;
use dogma_core::DogmaError;
use dogma_core::sequence::MoleculeKind;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const INDEX_GREETING: &str = "Hello, World!";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Deserialize, Serialize, ValueEnum,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[strum(serialize = "GET")]
    Get,

    #[default]
    #[strum(serialize = "POST")]
    Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum Route {
    #[strum(serialize = "/")]
    Index,

    #[strum(serialize = "/api/transcribe")]
    Transcribe,

    #[strum(serialize = "/api/translate")]
    Translate,

    #[strum(serialize = "/api/rna-to-dna")]
    RnaToDna,

    #[strum(serialize = "/api/codon-to-protein")]
    CodonToProtein,
}

impl Route {
    pub fn method(&self) -> Method {
        match self {
            Self::Index => Method::Get,
            _ => Method::Post,
        }
    }

    /// `action` field sent by clients of this route.
    pub fn action(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Transcribe => "transcribe",
            Self::Translate => "translate",
            Self::RnaToDna => "rna-to-dna",
            Self::CodonToProtein => "codon-to-protein",
        }
    }

    /// Molecule the request content describes.
    pub fn molecule_type(&self) -> Option<MoleculeKind> {
        match self {
            Self::Index => None,
            Self::Transcribe => Some(MoleculeKind::Dna),
            Self::Translate | Self::RnaToDna | Self::CodonToProtein => Some(MoleculeKind::Rna),
        }
    }

    /// Wrap `content` in the request envelope for this route.
    pub fn envelope<C>(&self, content: C) -> RequestDto<C> {
        RequestDto {
            action: self.action().to_string(),
            molecule_type: self
                .molecule_type()
                .map(|kind| kind.to_string())
                .unwrap_or_default(),
            content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl Request {
    pub fn json(method: Method, path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            content_type: Some(JSON_CONTENT_TYPE.to_string()),
            body: body.into(),
        }
    }

    /// `application/json` or `application/*+json`, parameters ignored.
    pub fn is_json(&self) -> bool {
        let Some(content_type) = &self.content_type else {
            return false;
        };
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        mime == JSON_CONTENT_TYPE || (mime.starts_with("application/") && mime.ends_with("+json"))
    }
}

pub fn handle(request: &Request) -> Response {
    let response = route_request(request);
    tracing::info!(
        method = %request.method,
        path = %request.path,
        status = response.status_code(),
        "handled request"
    );
    response
}

fn route_request(request: &Request) -> Response {
    let Ok(route) = request.path.parse::<Route>() else {
        return Response::failure("Not found", NOT_FOUND);
    };

    if route.method() != request.method {
        return Response::failure("Method not allowed", METHOD_NOT_ALLOWED);
    }

    if route == Route::Index {
        return Response::success(INDEX_GREETING);
    }

    if !request.is_json() {
        return Response::failure("Request must be JSON type", UNSUPPORTED_MEDIA_TYPE);
    }

    match serde_json::from_str::<Value>(&request.body) {
        Ok(Value::Null) | Err(_) => Response::failure("Invalid JSON format", BAD_REQUEST),
        Ok(body) => dispatch(route, body),
    }
}

/// Run the operation behind `route` on an already parsed body.
pub fn dispatch(route: Route, body: Value) -> Response {
    match route {
        Route::Index => Response::success(INDEX_GREETING),
        Route::Transcribe => run(body, |request: TranscribeRequest| {
            let content = request.content;
            dogma_core::transcribe(&content.sequence, &content.read_from, &content.to)
        }),
        Route::RnaToDna => run(body, |request: RnaToDnaRequest| {
            let content = request.content;
            dogma_core::rna_to_dna(&content.sequence, &content.read_from, &content.to)
        }),
        Route::Translate => run(body, |request: TranslateRequest| {
            let content = request.content;
            dogma_core::translate(
                &content.sequence,
                &content.read_from,
                &content.to,
                &content.naming_type,
            )
        }),
        Route::CodonToProtein => run(body, |request: CodonToProteinRequest| {
            let content = request.content;
            dogma_core::codon_to_protein(&content.codon, &content.naming_type)
        }),
    }
}

fn run<R, T>(body: Value, operation: impl FnOnce(R) -> Result<T, DogmaError>) -> Response
where
    R: DeserializeOwned,
    T: Serialize,
{
    let request = match serde_json::from_value::<R>(body) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!("Rejected request body: {}", e);
            return Response::validation_error(&e);
        }
    };

    match operation(request) {
        Ok(data) => Response::success(data),
        Err(e) => {
            tracing::debug!("Rejected molecule: {}", e);
            Response::from(e)
        }
    }
}
