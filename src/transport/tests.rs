use super::envelope;
use super::{ReadProfile, TransportError, VectorReceiver, VectorSender};
use crate::control::ControlVector;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::net::UnixDatagram;

const EPS: f64 = 1e-9;

fn test_endpoint(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("palmlink-{}-{name}.sock", std::process::id()))
}

fn sample_vector() -> ControlVector {
    ControlVector { roll: -0.12, pitch: 0.34, yaw: 1.5, thrust: 0.87 }
}

#[test]
fn test_envelope_round_trip() {
    let original = sample_vector();
    let line = envelope::encode(&original).unwrap();
    assert!(line.ends_with('\n'));
    let parsed = envelope::decode(line.as_bytes()).unwrap();
    assert!((parsed.roll - original.roll).abs() < EPS);
    assert!((parsed.pitch - original.pitch).abs() < EPS);
    assert!((parsed.yaw - original.yaw).abs() < EPS);
    assert!((parsed.thrust - original.thrust).abs() < EPS);
}

#[test]
fn test_envelope_rejects_wrong_arity_and_garbage() {
    assert!(envelope::decode(b"not json").is_err());
    assert!(envelope::decode(b"[1.0, 2.0, 3.0]\n").is_err());
    assert!(envelope::decode(b"[1.0, 2.0, 3.0, 4.0, 5.0]\n").is_err());
    assert!(envelope::decode(b"[1.0, \"two\", 3.0, 4.0]\n").is_err());
    assert!(envelope::decode(b"[1.0, 2.0, 3.0, 4.0]\n").is_ok());
}

#[tokio::test]
async fn test_send_recv_across_endpoint() {
    let path = test_endpoint("plain");
    let mut receiver =
        VectorReceiver::bind(&path, Duration::from_millis(500), ReadProfile::Lenient).unwrap();
    let sender = VectorSender::open(&path).unwrap();

    sender.send(&sample_vector()).await.unwrap();
    let got = receiver.recv_or_default(ControlVector::zero()).await.unwrap();
    assert!((got.thrust - 0.87).abs() < EPS);
}

#[tokio::test]
async fn test_malformed_envelope_lenient_yields_default() {
    let path = test_endpoint("lenient");
    let mut receiver =
        VectorReceiver::bind(&path, Duration::from_millis(500), ReadProfile::Lenient).unwrap();
    let raw = UnixDatagram::unbound().unwrap();
    raw.send_to(b"not json", &path).await.unwrap();

    let got = receiver.recv_or_default(ControlVector::zero()).await.unwrap();
    assert_eq!(got, ControlVector::zero());
}

#[tokio::test]
async fn test_malformed_envelope_strict_is_parse_error() {
    let path = test_endpoint("strict");
    let mut receiver =
        VectorReceiver::bind(&path, Duration::from_millis(500), ReadProfile::Strict).unwrap();
    let raw = UnixDatagram::unbound().unwrap();
    raw.send_to(b"[1.0, 2.0]\n", &path).await.unwrap();

    match receiver.recv_or_default(ControlVector::zero()).await {
        Err(TransportError::Parse(_)) => {}
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_rebinds_and_accepts_fresh_message() {
    let path = test_endpoint("rebind");
    let mut receiver =
        VectorReceiver::bind(&path, Duration::from_millis(200), ReadProfile::Lenient).unwrap();

    // Nothing arrives within the bound: the read degrades to the default and
    // the endpoint is rebuilt in place.
    let started = Instant::now();
    let got = receiver.recv_or_default(ControlVector::zero()).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(200));
    assert_eq!(got, ControlVector::zero());
    assert!(path.exists(), "endpoint must exist again after recovery");

    // A fresh sender reaches the rebuilt endpoint without a process restart.
    let sender = VectorSender::open(&path).unwrap();
    sender.send(&sample_vector()).await.unwrap();
    let got = receiver.recv_or_default(ControlVector::zero()).await.unwrap();
    assert!((got.yaw - 1.5).abs() < EPS);
}

#[tokio::test]
async fn test_pending_datagrams_coalesce_to_newest() {
    let path = test_endpoint("coalesce");
    let mut receiver =
        VectorReceiver::bind(&path, Duration::from_millis(500), ReadProfile::Lenient).unwrap();
    let sender = VectorSender::open(&path).unwrap();

    for thrust in [0.1, 0.2, 0.3] {
        let vector = ControlVector { roll: 0.0, pitch: 0.0, yaw: 0.0, thrust };
        sender.send(&vector).await.unwrap();
    }
    // Let all three land in the socket buffer before the read.
    tokio::time::sleep(Duration::from_millis(50)).await;

    let got = receiver.recv_or_default(ControlVector::zero()).await.unwrap();
    assert!((got.thrust - 0.3).abs() < EPS, "last write wins, got {}", got.thrust);
}

#[tokio::test]
async fn test_bind_replaces_stale_socket_file() {
    let path = test_endpoint("stale");
    // Leave a stale artifact behind by binding and leaking the file.
    {
        let first =
            VectorReceiver::bind(&path, Duration::from_millis(100), ReadProfile::Lenient)
                .unwrap();
        std::mem::forget(first);
    }
    assert!(path.exists());
    let mut receiver =
        VectorReceiver::bind(&path, Duration::from_millis(500), ReadProfile::Lenient).unwrap();

    let sender = VectorSender::open(&path).unwrap();
    sender.send(&sample_vector()).await.unwrap();
    assert!(receiver.recv_or_default(ControlVector::zero()).await.is_ok());
    drop(receiver);
    assert!(!path.exists(), "endpoint removed on teardown");
}

#[tokio::test]
async fn test_send_without_listener_is_nonfatal_error() {
    let path = test_endpoint("nolistener");
    let sender = VectorSender::open(&path).unwrap();
    match sender.send(&sample_vector()).await {
        Err(TransportError::Send(_)) => {}
        other => panic!("expected send error, got {other:?}"),
    }
}
