//! Gateway port — commands sent to the lighting gateway and the connector
//! that opens a session with it.
//!
//! A concrete gateway bridges an external protocol into lumohub. The
//! connector discovers it, exchanges the security code for credentials and
//! connects; the resulting connection pushes [`GatewayEvent`]s through the
//! supplied [`EventSender`] and accepts operations through [`Gateway`].

use std::future::Future;
use std::sync::Arc;

use lumohub_domain::credentials::Credentials;
use lumohub_domain::error::LumoError;
use lumohub_domain::event::GatewayEvent;
use lumohub_domain::group::Group;
use lumohub_domain::light::Light;
use lumohub_domain::operation::{GroupOperation, LightOperation};
use tokio::sync::mpsc;

/// Channel half used by a connection to publish gateway events.
pub type EventSender = mpsc::Sender<GatewayEvent>;

/// Outbound commands accepted by a connected gateway.
///
/// Every call is a single request; implementations must not retry and must
/// report failures as [`LumoError::Transport`].
pub trait Gateway {
    /// Apply `operation` to a single light.
    fn operate_light(
        &self,
        light: &Light,
        operation: LightOperation,
    ) -> impl Future<Output = Result<(), LumoError>> + Send;

    /// Apply `operation` to a group; `recursive` also applies it to member lights.
    fn operate_group(
        &self,
        group: &Group,
        operation: GroupOperation,
        recursive: bool,
    ) -> impl Future<Output = Result<(), LumoError>> + Send;

    /// Ask the gateway to reboot itself.
    fn reboot(&self) -> impl Future<Output = Result<(), LumoError>> + Send;
}

impl<T: Gateway + Send + Sync> Gateway for Arc<T> {
    fn operate_light(
        &self,
        light: &Light,
        operation: LightOperation,
    ) -> impl Future<Output = Result<(), LumoError>> + Send {
        (**self).operate_light(light, operation)
    }

    fn operate_group(
        &self,
        group: &Group,
        operation: GroupOperation,
        recursive: bool,
    ) -> impl Future<Output = Result<(), LumoError>> + Send {
        (**self).operate_group(group, operation, recursive)
    }

    fn reboot(&self) -> impl Future<Output = Result<(), LumoError>> + Send {
        (**self).reboot()
    }
}

/// A gateway found on the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayInfo {
    pub name: String,
    pub host: String,
}

/// Opens sessions with a gateway.
///
/// [`GatewaySession`](crate::session::GatewaySession) calls the methods in order:
///
/// 1. [`discover`](Self::discover) — find a gateway, if any
/// 2. [`authenticate`](Self::authenticate) — only when no stored credentials exist
/// 3. [`connect`](Self::connect) — open the session and subscribe to the
///    device, group and scene feeds
pub trait GatewayConnector {
    /// Live connection produced by [`connect`](Self::connect).
    type Connection: Gateway + Send + Sync + 'static;

    /// Unique name identifying this connector (e.g. `"virtual"`).
    fn name(&self) -> &'static str;

    /// Look for a gateway. `Ok(None)` means nothing answered.
    fn discover(&mut self) -> impl Future<Output = Result<Option<GatewayInfo>, LumoError>> + Send;

    /// Exchange the security code printed on the gateway for credentials.
    fn authenticate(
        &mut self,
        gateway: &GatewayInfo,
        security_code: &str,
    ) -> impl Future<Output = Result<Credentials, LumoError>> + Send;

    /// Connect and start forwarding observed events to `events`.
    ///
    /// Implementations should publish the current state of every device,
    /// group and scene once connected, then keep publishing changes.
    fn connect(
        &mut self,
        gateway: &GatewayInfo,
        credentials: &Credentials,
        events: EventSender,
    ) -> impl Future<Output = Result<Self::Connection, LumoError>> + Send;
}
