use crate::models::*;
use failure::Fail;
use log::debug;
use std::io::Read;
use std::time::Duration;

type Result<T> = std::result::Result<T, StackError>;

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);
const PROVIDER_NAMES: &[&str] = &["faas", "openfaas"];

#[derive(Debug, Fail)]
pub enum StackError {
    #[fail(display = "unable to read stack file {}: {}", _0, _1)]
    Read(String, String),
    #[fail(display = "unable to fetch stack file {}: {}", _0, _1)]
    Fetch(String, String),
    #[fail(display = "unable to parse stack file {}: {}", _0, _1)]
    Yaml(String, String),
    #[fail(
        display = "['faas', 'openfaas'] are the only valid providers for this tool - found: {}",
        _0
    )]
    Provider(String),
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn read_local(path: &str) -> Result<String> {
    let read = || -> std::io::Result<String> {
        let mut file = std::fs::File::open(path)?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        Ok(content)
    };
    read().map_err(|e| StackError::Read(path.to_owned(), e.to_string()))
}

fn fetch_remote(url: &str) -> Result<String> {
    let fetch = || -> reqwest::Result<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?;
        client.get(url).send()?.error_for_status()?.text()
    };
    fetch().map_err(|e| StackError::Fetch(url.to_owned(), e.to_string()))
}

/// Parses stack file contents. `origin` is only used in error messages.
pub fn parse_stack(origin: &str, content: &str) -> Result<ServiceSet> {
    let mut services = if content.trim().is_empty() {
        ServiceSet::default()
    } else {
        serde_yaml::from_str::<ServiceSet>(content)
            .map_err(|e| StackError::Yaml(origin.to_owned(), e.to_string()))?
    };

    let provider = &services.provider.name;
    if !provider.is_empty() && !PROVIDER_NAMES.contains(&provider.as_str()) {
        return Err(StackError::Provider(provider.clone()));
    }

    for (name, function) in services.functions.iter_mut() {
        function.name = name.clone();
    }
    Ok(services)
}

/// Loads a stack file from a local path or an `http(s)://` URL.
pub fn parse_stack_file(source: &str) -> Result<ServiceSet> {
    let content = if is_url(source) {
        debug!("fetching stack file from {}", source);
        fetch_remote(source)?
    } else {
        debug!("reading stack file {}", source);
        read_local(source)?
    };
    parse_stack(source, &content)
}
