#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod actuator;
mod bridge;
mod config;
mod control;
mod input;
mod logger;
mod transport;

use crate::actuator::ConsoleLink;
use crate::bridge::{PilotLoop, RemoteLoop};
use crate::config::{Config, LinkKind, SourceKind};
use crate::control::{ActuatorMapper, FailsafeGovernor, PoseMapper};
use crate::input::SinePose;
use crate::transport::{ReadProfile, VectorReceiver, VectorSender};
use std::env;
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let role = env::args().nth(1).unwrap_or_else(|| {
        fatal!("no role given, usage: palmlink <remote|pilot>");
    });
    let config = Config::from_env().unwrap_or_else(|e| {
        fatal!("configuration error: {e}");
    });

    let token = CancellationToken::new();
    let signal_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown requested");
            signal_token.cancel();
        }
    });

    match role.as_str() {
        "remote" => run_remote(&config, token).await,
        "pilot" => run_pilot(&config, token).await,
        other => fatal!("unknown role {other}, expected remote or pilot"),
    }
}

/// Sender process: pose source → mapper → failsafe → datagram channel.
async fn run_remote(config: &Config, token: CancellationToken) {
    let mapper = PoseMapper::from_config(config).unwrap_or_else(|e| {
        fatal!("configuration error: {e}");
    });
    let sender = VectorSender::open(config.socket_path()).unwrap_or_else(|e| {
        fatal!("could not open a sending socket: {e}");
    });
    let source = match config.source() {
        SourceKind::Sine => SinePose::new(config.height_min(), config.height_max()),
    };
    let governor = FailsafeGovernor::new(config.safety_timeout());
    info!("remote role up, emitting to {:?}", config.socket_path());
    RemoteLoop::new(source, mapper, governor, sender, config.send_period())
        .run(token)
        .await;
}

/// Receiver process: datagram channel → actuator mapper → actuator link.
async fn run_pilot(config: &Config, token: CancellationToken) {
    let receiver = VectorReceiver::bind(
        config.socket_path(),
        config.recv_timeout(),
        ReadProfile::Lenient,
    )
    .unwrap_or_else(|e| {
        fatal!(
            "could not bind {:?}: {e}, make sure no other pilot holds the endpoint",
            config.socket_path()
        );
    });
    let (link, events) = match config.link() {
        LinkKind::Console => ConsoleLink::new(),
    };
    let mapper = ActuatorMapper::from_config(config);
    info!("pilot role up, listening on {:?}", config.socket_path());
    PilotLoop::new(link, events, receiver, mapper).run(token).await;
}
