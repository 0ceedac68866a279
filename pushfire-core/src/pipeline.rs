//! The send pipeline: read, validate, build, send.

use tracing::{debug, info};

use crate::{Clock, DeliveryClient, OutboundRequest, PushDefinition, Result, SendConfig};

/// Read, validate and build the request described by `config`.
pub fn prepare(config: &SendConfig, clock: &dyn Clock) -> Result<OutboundRequest> {
    debug!(path = %config.push_file.display(), "Reading push file");
    let definition = PushDefinition::from_file(&config.push_file)?;

    definition.validate()?;
    debug!(
        has_notification = definition.notification.is_some(),
        data_entries = definition.data.len(),
        "Push file is valid"
    );

    Ok(OutboundRequest::build(
        definition,
        config.target.clone(),
        config.ttl,
        clock,
    ))
}

/// Hand a built request to `client`. Returns the message identifier.
pub async fn deliver(
    request: &OutboundRequest,
    client: &dyn DeliveryClient,
    dry_run: bool,
) -> Result<String> {
    let name = client.send(request, dry_run).await?;
    info!(recipient = %request.target, name = %name, dry_run, "Message sent");
    Ok(name)
}

/// Build the request and hand it to `client`. Returns the message identifier.
pub async fn run(
    config: &SendConfig,
    client: &dyn DeliveryClient,
    clock: &dyn Clock,
    dry_run: bool,
) -> Result<String> {
    let request = prepare(config, clock)?;
    deliver(&request, client, dry_run).await
}
