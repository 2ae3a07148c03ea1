//! Decides which functions a remove run deletes.
//!
//! Functions declared in a stack file always take priority over a function
//! named on the command line; the two are never merged.

use crate::models::*;
use crate::stack::{self, StackError};
use failure::Fail;
use log::debug;

#[derive(Debug, Fail, PartialEq)]
pub enum ResolveError {
    #[fail(display = "{}", _0)]
    Parse(String),
    #[fail(display = "Please provide the name of a function to delete")]
    MissingTarget,
}

type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Debug, Clone, PartialEq)]
pub enum TargetSource {
    FromStack(ServiceSet),
    FromArg(String),
}

impl TargetSource {
    pub fn into_targets(self, default_gateway: &str) -> Vec<ResolvedTarget> {
        match self {
            TargetSource::FromStack(services) => services
                .functions
                .keys()
                .map(|name| ResolvedTarget::new(&services.provider.gateway_url, name))
                .collect(),
            TargetSource::FromArg(name) => vec![ResolvedTarget::new(default_gateway, &name)],
        }
    }
}

/// Picks the stack when it declares any function, otherwise the positional name.
pub fn select_source(
    services: Option<&ServiceSet>,
    positional_arg: Option<&str>,
    default_network: &str,
) -> Result<TargetSource> {
    match services {
        Some(services) if !services.is_empty() => Ok(TargetSource::FromStack(
            services.with_default_network(default_network),
        )),
        _ => positional_arg
            .map(|name| TargetSource::FromArg(name.to_owned()))
            .ok_or(ResolveError::MissingTarget),
    }
}

pub fn resolve_with<F>(
    parse: F,
    stack_source: Option<&str>,
    positional_arg: Option<&str>,
    default_gateway: &str,
    default_network: &str,
) -> Result<Vec<ResolvedTarget>>
where
    F: FnOnce(&str) -> std::result::Result<ServiceSet, StackError>,
{
    let services = match stack_source {
        Some(source) => Some(parse(source).map_err(|e| ResolveError::Parse(e.to_string()))?),
        None => None,
    };

    let source = select_source(services.as_ref(), positional_arg, default_network)?;
    if let (TargetSource::FromStack(_), Some(arg)) = (&source, positional_arg) {
        debug!("ignoring positional argument {} in favour of stack file", arg);
    }
    Ok(source.into_targets(default_gateway))
}

pub fn resolve(
    stack_source: Option<&str>,
    positional_arg: Option<&str>,
    default_gateway: &str,
) -> Result<Vec<ResolvedTarget>> {
    resolve_with(
        stack::parse_stack_file,
        stack_source,
        positional_arg,
        default_gateway,
        DEFAULT_NETWORK,
    )
}
