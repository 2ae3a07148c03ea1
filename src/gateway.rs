use log::trace;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_derive::Serialize;

type Result<T> = std::result::Result<T, failure::Error>;

#[derive(Debug, Serialize)]
struct DeleteFunctionRequest<'a> {
    #[serde(rename = "functionName")]
    function_name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    NotFound,
    Unexpected { status: u16, body: String },
}

/// Removes a deployed function from a gateway.
pub trait FunctionDeleter {
    fn delete_function(&self, gateway_url: &str, function_name: &str) -> Result<DeleteOutcome>;
}

pub struct GatewayClient {
    client: Client,
}

impl GatewayClient {
    pub fn new() -> Self {
        GatewayClient {
            client: Client::new(),
        }
    }
}

impl Default for GatewayClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionDeleter for GatewayClient {
    fn delete_function(&self, gateway_url: &str, function_name: &str) -> Result<DeleteOutcome> {
        let uri = format!("{}/system/functions", gateway_url.trim_end_matches('/'));
        trace!("DELETE {} functionName={}", uri, function_name);

        let response = self
            .client
            .delete(&uri)
            .json(&DeleteFunctionRequest { function_name })
            .send()?;
        let status = response.status();
        trace!("response status: {}", status);

        if status.is_success() {
            Ok(DeleteOutcome::Removed)
        } else if status == StatusCode::NOT_FOUND {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Unexpected {
                status: status.as_u16(),
                body: response.text()?,
            })
        }
    }
}
