use crate::error::AppError;
use crate::response::{BAD_REQUEST, Response};
use crate::router::{self, JSON_CONTENT_TYPE, Method, Request};
use serde::Deserialize;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::task::JoinSet;

/// One line of `serve` input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineRequest {
    /// Copied onto the response so clients can match them up.
    #[serde(default)]
    pub id: Option<Value>,

    #[serde(default)]
    pub method: Method,

    pub path: String,

    /// Defaults to `application/json`.
    #[serde(default)]
    pub content_type: Option<String>,

    #[serde(default)]
    pub body: Value,
}

impl From<LineRequest> for Request {
    fn from(line: LineRequest) -> Self {
        Request {
            method: line.method,
            path: line.path,
            content_type: Some(
                line.content_type
                    .unwrap_or_else(|| JSON_CONTENT_TYPE.to_string()),
            ),
            body: line.body.to_string(),
        }
    }
}

/// Answer one input line with one output line (without the newline).
pub fn respond(line: &str) -> Result<String, serde_json::Error> {
    let (id, response) = match serde_json::from_str::<Value>(line) {
        Err(_) => (None, Response::failure("Invalid JSON format", BAD_REQUEST)),
        Ok(value) => {
            let id = value.get("id").cloned();
            match serde_json::from_value::<LineRequest>(value) {
                Ok(line_request) => (id, router::handle(&line_request.into())),
                Err(e) => (id, Response::validation_error(&e)),
            }
        }
    };

    let mut value = serde_json::to_value(&response)?;
    if let (Some(id), Value::Object(fields)) = (id, &mut value) {
        fields.insert("id".to_string(), id);
    }
    serde_json::to_string(&value)
}

/// Serve newline-delimited requests from `reader` until EOF.
///
/// Each line is handled on its own task and answered as soon as it is done,
/// so responses may come back out of order. Returns the number answered.
pub async fn serve<R, W>(reader: R, mut writer: W) -> Result<usize, AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut tasks: JoinSet<Result<String, serde_json::Error>> = JoinSet::new();
    let mut reading = true;
    let mut answered = 0;

    while reading || !tasks.is_empty() {
        tokio::select! {
            line = lines.next_line(), if reading => {
                match line? {
                    Some(line) if line.trim().is_empty() => {}
                    Some(line) => {
                        tasks.spawn(async move { respond(&line) });
                    }
                    None => {
                        tracing::debug!("Input closed, {} requests in flight", tasks.len());
                        reading = false;
                    }
                }
            }
            Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                let mut output = joined??;
                output.push('\n');
                writer.write_all(output.as_bytes()).await?;
                writer.flush().await?;
                answered += 1;
            }
        }
    }

    Ok(answered)
}
