use crate::config::RemoveConfig;
use crate::dispatcher;
use crate::gateway::FunctionDeleter;
use crate::models::ServiceSet;
use crate::resolver::{self, ResolveError};
use crate::stack::StackError;
use std::io::Write;

/// Resolves the targets for one remove run and deletes them.
pub fn run_with<F>(
    parse: F,
    config: &RemoveConfig,
    positional_arg: Option<&str>,
    deleter: &dyn FunctionDeleter,
    out: &mut dyn Write,
) -> Result<usize, ResolveError>
where
    F: FnOnce(&str) -> Result<ServiceSet, StackError>,
{
    let targets = resolver::resolve_with(
        parse,
        config.yaml_file.as_deref(),
        config.function_name(positional_arg),
        &config.gateway,
        &config.default_network,
    )?;
    Ok(dispatcher::dispatch(&targets, deleter, out))
}
